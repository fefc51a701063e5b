//! Square grid decomposition of an operational area
//!
//! A [`GridArea`] covers a rectangle given by its center and dimensions.
//! [`GridArea::decompose`] lays out an R x R matrix of cells whose column
//! spacing is the configured cell width and whose row spacing stretches to
//! cover the area's height, and links every cell to its orthogonal
//! neighbours. [`GridArea::split`] then hands out contiguous row-blocks, one
//! per vehicle.

use mvplan_core::{ceil_centi, DecompositionConfig, GeoCoordinate, Geodesy, HaversineGeodesy};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::bounds::GridBounds;
use crate::cell::{Cell, CellIndex};
use crate::environment::Environment;
use crate::error::{DecompositionError, Result};

/// Grid decomposition of a rectangular operational area
#[derive(Clone)]
pub struct GridArea {
    center: GeoCoordinate,
    grid_width: f64,
    grid_height: f64,
    cell_width: f64,
    cell_height: f64,
    max_cells: usize,
    nrows: usize,
    ncols: usize,
    /// Row of the originating decomposition that this grid's first row maps to
    first_row: usize,
    bounds: GridBounds,
    cells: Vec<Vec<Arc<Cell>>>,
    geodesy: Arc<dyn Geodesy>,
    environment: Option<Arc<dyn Environment>>,
}

impl GridArea {
    /// Create an undecomposed grid of `width` x `height` meters around `center`.
    ///
    /// Uses [`HaversineGeodesy`]; see [`GridArea::with_geodesy`] to swap it.
    pub fn new(
        width: f64,
        height: f64,
        center: GeoCoordinate,
        config: &DecompositionConfig,
    ) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(DecompositionError::Geometry(format!(
                "grid width must be a positive finite number, got {}",
                width
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(DecompositionError::Geometry(format!(
                "grid height must be a positive finite number, got {}",
                height
            )));
        }
        if !center.is_finite() {
            return Err(DecompositionError::Geometry(format!(
                "grid center must be finite, got {}",
                center
            )));
        }
        config
            .validate()
            .map_err(|e| DecompositionError::Geometry(e.to_string()))?;

        let geodesy: Arc<dyn Geodesy> = Arc::new(HaversineGeodesy);
        let bounds = GridBounds::compute(geodesy.as_ref(), &center, width, height);

        Ok(Self {
            center,
            grid_width: width,
            grid_height: height,
            cell_width: config.cell_width_m,
            cell_height: 0.0,
            max_cells: config.max_cells,
            nrows: 0,
            ncols: 0,
            first_row: 0,
            bounds,
            cells: Vec::new(),
            geodesy,
            environment: None,
        })
    }

    /// Attach an environment for obstacle queries
    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Replace the geodesic model and recompute the bounds with it
    pub fn with_geodesy(mut self, geodesy: Arc<dyn Geodesy>) -> Self {
        self.bounds =
            GridBounds::compute(geodesy.as_ref(), &self.center, self.grid_width, self.grid_height);
        self.geodesy = geodesy;
        self
    }

    /// Build the cell matrix and adjacency graph from the current bounds.
    ///
    /// Calling it again rebuilds the grid from scratch. Refuses grids larger
    /// than the configured `max_cells`. On error nothing is changed.
    pub fn decompose(&mut self) -> Result<()> {
        let GridBounds {
            top_left,
            top_right,
            bottom_left,
            ..
        } = self.bounds;

        let width = self.geodesy.distance_m(&top_right, &top_left);
        let height = self.geodesy.distance_m(&bottom_left, &top_left);
        if !width.is_finite() || !height.is_finite() {
            return Err(DecompositionError::Geometry(format!(
                "bounds yield non-finite dimensions ({} x {})",
                width, height
            )));
        }

        let width = ceil_centi(width);
        let height = ceil_centi(height);
        if width <= 0.0 || height <= 0.0 {
            return Err(DecompositionError::Geometry(format!(
                "bounds enclose no area ({} x {} m)",
                width, height
            )));
        }

        // Width alone fixes the resolution; rows stretch to the height
        let ncols = (width / self.cell_width).floor() as usize;
        if ncols == 0 {
            return Err(DecompositionError::Geometry(format!(
                "area is {} m wide, narrower than one {} m cell",
                width, self.cell_width
            )));
        }
        let nrows = ncols;
        match ncols.checked_mul(nrows) {
            Some(total) if total <= self.max_cells => {}
            _ => {
                return Err(DecompositionError::Geometry(format!(
                    "{} x {} cells exceeds the limit of {}",
                    nrows, ncols, self.max_cells
                )))
            }
        }
        let cell_height = ceil_centi(height / nrows as f64);

        let mut links: Vec<Vec<CellIndex>> = vec![Vec::with_capacity(4); nrows * ncols];
        for i in 0..nrows {
            for j in 0..ncols {
                let here = CellIndex::new(i, j);
                if i > 0 {
                    let above = CellIndex::new(i - 1, j);
                    links[i * ncols + j].push(above);
                    links[(i - 1) * ncols + j].push(here);
                }
                if j > 0 {
                    let left = CellIndex::new(i, j - 1);
                    links[i * ncols + j].push(left);
                    links[i * ncols + j - 1].push(here);
                }
            }
        }

        let mut links = links.into_iter();
        let mut cells = Vec::with_capacity(nrows);
        for i in 0..nrows {
            let mut row = Vec::with_capacity(ncols);
            for j in 0..ncols {
                let vertical_shift = i as f64 * cell_height;
                let horizontal_shift = j as f64 * self.cell_width;
                let location = self
                    .geodesy
                    .offset(&top_left, -vertical_shift, horizontal_shift);

                // TODO: classify against self.environment once the obstacle policy is agreed
                let neighbours = links.next().unwrap_or_default();
                row.push(Arc::new(Cell::new(
                    CellIndex::new(i, j),
                    location,
                    false,
                    neighbours,
                )));
            }
            cells.push(row);
        }

        self.grid_width = width;
        self.grid_height = height;
        self.ncols = ncols;
        self.nrows = nrows;
        self.cell_height = cell_height;
        self.first_row = 0;
        self.cells = cells;

        debug!(
            rows = nrows,
            cols = ncols,
            cell_width = self.cell_width,
            cell_height,
            "Decomposed operational area"
        );
        Ok(())
    }

    /// Partition the rows into `parts` contiguous blocks, one per vehicle.
    ///
    /// Every block but the last gets `rows / parts` rows; the last also takes
    /// the remainder. Fails for 0 or 1 parts and for more parts than rows.
    ///
    /// Sub-grids share the cells of this grid and keep its center.
    pub fn split(&self, parts: usize) -> Result<Vec<GridArea>> {
        if parts == 0 || parts == 1 || parts > self.nrows {
            return Err(DecompositionError::InvalidPartitionCount {
                requested: parts,
                rows: self.nrows,
            });
        }

        let base_rows = self.nrows / parts;
        let remainder = self.nrows % parts;

        let grids: Vec<GridArea> = (0..parts)
            .map(|i| {
                let start = i * base_rows;
                let rows = if i == parts - 1 {
                    base_rows + remainder
                } else {
                    base_rows
                };
                self.subset(start, rows)
            })
            .collect();

        debug!(
            rows = self.nrows,
            parts,
            base_rows,
            last_rows = base_rows + remainder,
            "Split grid into row blocks"
        );
        Ok(grids)
    }

    fn subset(&self, start: usize, rows: usize) -> GridArea {
        let cells: Vec<Vec<Arc<Cell>>> = self.cells[start..start + rows].to_vec();
        let grid_width = self.cell_width * self.ncols as f64;
        let grid_height = self.cell_height * rows as f64;

        // FIXME: each block keeps the parent's center, so its bounds are not
        // where its cells are. Needs a decision on recentering before fixing.
        let center = self.center;
        let bounds = GridBounds::compute(self.geodesy.as_ref(), &center, grid_width, grid_height);

        GridArea {
            center,
            grid_width,
            grid_height,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            max_cells: self.max_cells,
            nrows: rows,
            ncols: self.ncols,
            first_row: self.first_row + start,
            bounds,
            cells,
            geodesy: Arc::clone(&self.geodesy),
            environment: self.environment.clone(),
        }
    }

    /// All cells in row-major order
    pub fn area_cells(&self) -> Vec<Arc<Cell>> {
        self.cells.iter().flatten().cloned().collect()
    }

    /// Corners in `[top_left, top_right, bottom_left, bottom_right]` order
    pub fn bounds(&self) -> [GeoCoordinate; 4] {
        self.bounds.corners()
    }

    /// Corners as a struct
    pub fn grid_bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// The cell matrix, one vector per row
    pub fn cells(&self) -> &[Vec<Arc<Cell>>] {
        &self.cells
    }

    /// Look up a cell by its index in the originating decomposition.
    ///
    /// Returns `None` for cells that belong to another block of a split.
    pub fn cell(&self, index: CellIndex) -> Option<&Arc<Cell>> {
        let row = index.row.checked_sub(self.first_row)?;
        self.cells.get(row)?.get(index.col)
    }

    /// Neighbours of `cell` that belong to this grid
    pub fn neighbours<'a>(&'a self, cell: &'a Cell) -> impl Iterator<Item = &'a Arc<Cell>> + 'a {
        cell.neighbours().iter().filter_map(move |index| self.cell(*index))
    }

    /// Whether cells have been built
    pub fn is_decomposed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Row count R
    pub fn number_of_rows(&self) -> usize {
        self.nrows
    }

    /// Column count
    pub fn number_of_columns(&self) -> usize {
        self.ncols
    }

    /// First row of this grid in the originating decomposition
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Cell edge length in meters, east-west
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Row spacing in meters, north-south
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Width in meters; the measured width once decomposed
    pub fn grid_width(&self) -> f64 {
        self.grid_width
    }

    /// Height in meters; the measured height once decomposed
    pub fn grid_height(&self) -> f64 {
        self.grid_height
    }

    /// Center the bounds were computed from
    pub fn center(&self) -> &GeoCoordinate {
        &self.center
    }

    /// Attached obstacle source, if any
    pub fn environment(&self) -> Option<&Arc<dyn Environment>> {
        self.environment.as_ref()
    }
}

impl fmt::Debug for GridArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridArea")
            .field("center", &self.center)
            .field("grid_width", &self.grid_width)
            .field("grid_height", &self.grid_height)
            .field("cell_width", &self.cell_width)
            .field("cell_height", &self.cell_height)
            .field("nrows", &self.nrows)
            .field("ncols", &self.ncols)
            .field("first_row", &self.first_row)
            .field("has_environment", &self.environment.is_some())
            .finish_non_exhaustive()
    }
}
