//! Core functionality for the mvplan multi-vehicle planning system.
//!
//! This crate provides the geodesy primitives, configuration and logging
//! shared by the decomposition, fleet and planning crates.

pub mod config;
pub mod error;
pub mod geo;
pub mod logging;

pub use config::{DecompositionConfig, PlanningConfig};
pub use error::{CoreError, Result};
pub use geo::{ceil_centi, GeoCoordinate, Geodesy, HaversineGeodesy, EARTH_RADIUS_M};
