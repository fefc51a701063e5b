//! Vehicle status queries
//!
//! Availability for a vehicle in `SERVICE` depends on whether it is in its
//! operating medium (in the water, in the air) or sitting on a dock. That
//! fact comes from telemetry outside this crate, behind
//! [`VehicleStatusProvider`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Source of per-vehicle physical status
pub trait VehicleStatusProvider: Send + Sync {
    /// Whether the vehicle is in its operating medium.
    ///
    /// `None` when the provider knows nothing about the vehicle.
    fn is_in_operation_medium(&self, vehicle_id: &str) -> Option<bool>;
}

impl<F> VehicleStatusProvider for F
where
    F: Fn(&str) -> Option<bool> + Send + Sync,
{
    fn is_in_operation_medium(&self, vehicle_id: &str) -> Option<bool> {
        self(vehicle_id)
    }
}

/// In-memory provider fed from telemetry reports
#[derive(Debug, Default)]
pub struct MediumRegistry {
    in_medium: RwLock<HashMap<String, bool>>,
}

impl MediumRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether a vehicle is in its operating medium
    pub fn report(&self, vehicle_id: impl Into<String>, in_medium: bool) {
        self.in_medium
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(vehicle_id.into(), in_medium);
    }

    /// Forget a vehicle
    pub fn remove(&self, vehicle_id: &str) -> Option<bool> {
        self.in_medium
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(vehicle_id)
    }
}

impl VehicleStatusProvider for MediumRegistry {
    fn is_in_operation_medium(&self, vehicle_id: &str) -> Option<bool> {
        self.in_medium
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(vehicle_id)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_reports() {
        let registry = MediumRegistry::new();
        assert_eq!(registry.is_in_operation_medium("lauv-1"), None);

        registry.report("lauv-1", true);
        assert_eq!(registry.is_in_operation_medium("lauv-1"), Some(true));

        registry.report("lauv-1", false);
        assert_eq!(registry.is_in_operation_medium("lauv-1"), Some(false));

        assert_eq!(registry.remove("lauv-1"), Some(false));
        assert_eq!(registry.is_in_operation_medium("lauv-1"), None);
    }

    #[test]
    fn test_closure_provider() {
        let provider = |id: &str| Some(id.starts_with("auv"));
        assert_eq!(provider.is_in_operation_medium("auv-7"), Some(true));
        assert_eq!(provider.is_in_operation_medium("uav-2"), Some(false));
    }
}
