//! Test utilities for cross-crate integration tests

use mvplan_core::{logging, DecompositionConfig, GeoCoordinate};
use mvplan_decomposition::GridArea;
use mvplan_fleet::{MediumRegistry, VehicleAwareness, VehicleState, VehicleStateChanged};
use std::sync::{Arc, Once};

static LOGGING: Once = Once::new();

/// Install the test log subscriber once per process
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = logging::try_init();
    });
}

/// Center of the test operational area (Leixões harbour approach)
pub fn test_center() -> GeoCoordinate {
    GeoCoordinate {
        latitude: 41.1851,
        longitude: -8.7044,
    }
}

/// Decomposed grid of the given size with default 20 m cells
pub fn decomposed_grid(width: f64, height: f64) -> GridArea {
    let mut grid = GridArea::new(width, height, test_center(), &DecompositionConfig::default())
        .expect("valid test grid");
    grid.decompose().expect("test grid decomposes");
    grid
}

/// Tracker backed by an in-memory medium registry
pub fn test_awareness() -> (Arc<MediumRegistry>, Arc<VehicleAwareness>) {
    let registry = Arc::new(MediumRegistry::new());
    let awareness = VehicleAwareness::new(registry.clone());
    (registry, Arc::new(awareness))
}

/// Shorthand for a state change event
pub fn state_event(vehicle_id: &str, state: VehicleState) -> VehicleStateChanged {
    VehicleStateChanged::new(vehicle_id, state)
}
