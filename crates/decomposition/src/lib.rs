//! MVPlan Decomposition
//!
//! Decomposes a rectangular operational area into a square grid of cells
//! and partitions that grid into contiguous row-blocks so several vehicles
//! can cover it in parallel.
//!
//! This crate provides:
//! - [`GridArea`]: the grid decomposer (`decompose`, `split`, cell queries)
//! - [`Cell`] and [`CellIndex`]: grid cells with 4-connected adjacency
//! - [`MapDecomposition`]: the interface allocators are written against
//! - [`Environment`]: obstacle query extension point (not consulted yet)
//!
//! # Examples
//!
//! ```
//! use mvplan_core::{DecompositionConfig, GeoCoordinate};
//! use mvplan_decomposition::GridArea;
//!
//! let center = GeoCoordinate::new(41.1851, -8.7044).unwrap();
//! let mut grid = GridArea::new(110.0, 90.0, center, &DecompositionConfig::default()).unwrap();
//! grid.decompose().unwrap();
//!
//! let blocks = grid.split(3).unwrap();
//! let rows: Vec<usize> = blocks.iter().map(|b| b.number_of_rows()).collect();
//! assert_eq!(rows, vec![1, 1, 3]);
//! ```

#![warn(missing_docs)]

pub mod bounds;
pub mod cell;
pub mod environment;
pub mod error;
pub mod grid;
pub mod traits;

pub use bounds::GridBounds;
pub use cell::{Cell, CellIndex};
pub use environment::Environment;
pub use error::{DecompositionError, Result};
pub use grid::GridArea;
pub use traits::MapDecomposition;
