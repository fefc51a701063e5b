//! Decomposition strategy interface
//!
//! Allocators are written against [`MapDecomposition`] so the grid can be
//! swapped for other decompositions without touching assignment logic.

use std::sync::Arc;

use mvplan_core::GeoCoordinate;

use crate::cell::Cell;
use crate::error::Result;
use crate::grid::GridArea;

/// A decomposition of an operational area into cells
pub trait MapDecomposition: Sized {
    /// Build the cells; required before any cell query
    fn decompose(&mut self) -> Result<()>;

    /// Partition into `parts` disjoint decompositions
    fn split(&self, parts: usize) -> Result<Vec<Self>>;

    /// Corners in `[top_left, top_right, bottom_left, bottom_right]` order
    fn bounds(&self) -> [GeoCoordinate; 4];

    /// All cells, in a stable order
    fn area_cells(&self) -> Vec<Arc<Cell>>;
}

impl MapDecomposition for GridArea {
    fn decompose(&mut self) -> Result<()> {
        GridArea::decompose(self)
    }

    fn split(&self, parts: usize) -> Result<Vec<Self>> {
        GridArea::split(self, parts)
    }

    fn bounds(&self) -> [GeoCoordinate; 4] {
        GridArea::bounds(self)
    }

    fn area_cells(&self) -> Vec<Arc<Cell>> {
        GridArea::area_cells(self)
    }
}
