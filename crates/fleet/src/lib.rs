//! MVPlan Fleet - vehicle availability for plan allocation
//!
//! This crate tracks which vehicles can accept new plans. It handles:
//! - Vehicle state signals ([`VehicleState`], [`VehicleStateChanged`])
//! - Physical status lookups ([`VehicleStatusProvider`], [`MediumRegistry`])
//! - The availability partition and its lossless, ordered change
//!   notifications ([`VehicleAwareness`], [`AvailabilityEvent`])
//!
//! # Availability rules
//!
//! - `FINISHED` makes a vehicle available
//! - `SERVICE` makes it available only while it is in its operating medium
//! - Every other state, including unrecognised ones, makes it unavailable
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use mvplan_fleet::{MediumRegistry, VehicleAwareness, VehicleState, VehicleStateChanged};
//!
//! let registry = Arc::new(MediumRegistry::new());
//! let awareness = VehicleAwareness::new(registry.clone());
//! let mut updates = awareness.subscribe();
//!
//! registry.report("lauv-xplore-1", true);
//! awareness.on_vehicle_state_changed(&VehicleStateChanged::new("lauv-xplore-1", VehicleState::Service));
//!
//! assert!(awareness.is_vehicle_available("lauv-xplore-1"));
//! assert_eq!(updates.try_recv().unwrap().vehicle_id(), "lauv-xplore-1");
//! ```

#![warn(missing_docs)]

pub mod awareness;
pub mod state;
pub mod status;

pub use awareness::{Availability, AvailabilityEvent, VehicleAwareness};
pub use state::{VehicleState, VehicleStateChanged};
pub use status::{MediumRegistry, VehicleStatusProvider};
