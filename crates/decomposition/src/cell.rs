//! Grid cells
//!
//! A [`Cell`] is the atomic unit of a decomposed area. Cells are created in
//! bulk by [`GridArea::decompose`](crate::GridArea::decompose), shared as
//! `Arc<Cell>` between a grid and the sub-grids split from it, and never
//! mutated afterwards.

use mvplan_core::GeoCoordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell in the decomposition that created it.
///
/// The index does not change when the cell is shared into a sub-grid, so
/// neighbour links stay valid across splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIndex {
    /// Row, counted from the northern edge
    pub row: usize,
    /// Column, counted from the western edge
    pub col: usize,
}

impl CellIndex {
    /// Create a new index
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Atomic unit of a decomposed area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    index: CellIndex,
    location: GeoCoordinate,
    obstacle: bool,
    /// Non-owning links to the up-to-4 orthogonally adjacent cells
    neighbours: Vec<CellIndex>,
}

impl Cell {
    pub(crate) fn new(
        index: CellIndex,
        location: GeoCoordinate,
        obstacle: bool,
        neighbours: Vec<CellIndex>,
    ) -> Self {
        Self {
            index,
            location,
            obstacle,
            neighbours,
        }
    }

    /// Position in the originating decomposition
    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// North-west corner of the cell
    pub fn location(&self) -> &GeoCoordinate {
        &self.location
    }

    /// Whether the cell is blocked. Always `false` until obstacle
    /// classification is implemented.
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    /// Indices of adjacent cells, in the order the links were made
    pub fn neighbours(&self) -> &[CellIndex] {
        &self.neighbours
    }

    /// Number of adjacent cells, at most 4
    pub fn neighbour_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Whether `other` is linked to this cell
    pub fn is_neighbour(&self, other: CellIndex) -> bool {
        self.neighbours.contains(&other)
    }
}
