//! Fleet availability tracking
//!
//! [`VehicleAwareness`] keeps every vehicle it has heard about in exactly one
//! of two sets, available or unavailable, and moves vehicles between them as
//! state change events arrive. Subscribers are told about every actual move
//! and nothing else. Each subscriber owns an unbounded queue, so a slow
//! consumer falls behind but never loses a transition.
//!
//! Vehicles are unknown until their first event; there is no startup
//! snapshot of the fleet.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::state::{VehicleState, VehicleStateChanged};
use crate::status::VehicleStatusProvider;

/// Whether a vehicle can take a new plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    /// Ready for a new plan
    Available,
    /// Busy, faulty, docked or unreachable
    Unavailable,
}

/// Notification emitted when a vehicle moves between sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityEvent {
    /// Vehicle became available
    Available {
        /// Vehicle identifier
        vehicle_id: String,
    },
    /// Vehicle became unavailable
    Unavailable {
        /// Vehicle identifier
        vehicle_id: String,
    },
}

impl AvailabilityEvent {
    fn new(vehicle_id: String, availability: Availability) -> Self {
        match availability {
            Availability::Available => AvailabilityEvent::Available { vehicle_id },
            Availability::Unavailable => AvailabilityEvent::Unavailable { vehicle_id },
        }
    }

    /// The vehicle this event is about
    pub fn vehicle_id(&self) -> &str {
        match self {
            AvailabilityEvent::Available { vehicle_id } => vehicle_id,
            AvailabilityEvent::Unavailable { vehicle_id } => vehicle_id,
        }
    }

    /// The vehicle's new availability
    pub fn availability(&self) -> Availability {
        match self {
            AvailabilityEvent::Available { .. } => Availability::Available,
            AvailabilityEvent::Unavailable { .. } => Availability::Unavailable,
        }
    }
}

#[derive(Default)]
struct Fleet {
    /// One entry per vehicle ever observed; the map keeps the sets disjoint
    vehicles: HashMap<String, Availability>,
    subscribers: Vec<mpsc::UnboundedSender<AvailabilityEvent>>,
}

/// Tracks which fleet members can accept new plans
pub struct VehicleAwareness {
    fleet: RwLock<Fleet>,
    status: Arc<dyn VehicleStatusProvider>,
}

impl VehicleAwareness {
    /// Create a tracker that consults `status` for vehicles in `SERVICE`
    pub fn new(status: Arc<dyn VehicleStatusProvider>) -> Self {
        Self {
            fleet: RwLock::new(Fleet::default()),
            status,
        }
    }

    /// Apply a state change event.
    ///
    /// Returns the notification that was emitted, or `None` if the vehicle
    /// already had the resulting availability.
    ///
    /// The status provider is queried before the tracker lock is taken, so
    /// with concurrent producers a medium reading may be older than the
    /// transition committed just before this one.
    pub fn on_vehicle_state_changed(&self, event: &VehicleStateChanged) -> Option<AvailabilityEvent> {
        let target = self.resolve(event);
        self.set_availability(&event.vehicle_id, target)
    }

    /// Map a state signal to the availability it implies
    fn resolve(&self, event: &VehicleStateChanged) -> Availability {
        match event.state {
            VehicleState::Finished => Availability::Available,
            VehicleState::Service => match self.status.is_in_operation_medium(&event.vehicle_id) {
                Some(true) => Availability::Available,
                // In SERVICE but docked or on land
                Some(false) => Availability::Unavailable,
                None => {
                    warn!(
                        vehicle_id = %event.vehicle_id,
                        "No medium information for vehicle in SERVICE, treating as unavailable"
                    );
                    Availability::Unavailable
                }
            },
            _ => Availability::Unavailable,
        }
    }

    fn set_availability(&self, vehicle_id: &str, target: Availability) -> Option<AvailabilityEvent> {
        let mut fleet = self.fleet.write().unwrap_or_else(PoisonError::into_inner);

        if fleet.vehicles.get(vehicle_id) == Some(&target) {
            return None;
        }
        fleet.vehicles.insert(vehicle_id.to_string(), target);

        let event = AvailabilityEvent::new(vehicle_id.to_string(), target);
        // Sent under the lock so subscribers see transitions in commit order.
        // Dropped receivers are pruned here.
        fleet
            .subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());

        match target {
            Availability::Available => info!(vehicle_id = %vehicle_id, "Vehicle set as AVAILABLE"),
            Availability::Unavailable => {
                info!(vehicle_id = %vehicle_id, "Vehicle set as UNAVAILABLE")
            }
        }

        Some(event)
    }

    /// Subscribe to availability changes from now on.
    ///
    /// The queue is unbounded: every transition committed after this call is
    /// delivered, in commit order, however far the receiver falls behind.
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<AvailabilityEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.fleet
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .push(tx);
        rx
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.fleet
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .iter()
            .filter(|subscriber| !subscriber.is_closed())
            .count()
    }

    /// Whether the vehicle is known and available
    pub fn is_vehicle_available(&self, vehicle_id: &str) -> bool {
        self.availability(vehicle_id) == Some(Availability::Available)
    }

    /// Current availability, `None` for vehicles never observed
    pub fn availability(&self, vehicle_id: &str) -> Option<Availability> {
        self.fleet
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .vehicles
            .get(vehicle_id)
            .copied()
    }

    /// Sorted snapshot of the available set
    pub fn available_vehicles(&self) -> Vec<String> {
        self.vehicles_with(Availability::Available)
    }

    /// Sorted snapshot of the unavailable set
    pub fn unavailable_vehicles(&self) -> Vec<String> {
        self.vehicles_with(Availability::Unavailable)
    }

    fn vehicles_with(&self, availability: Availability) -> Vec<String> {
        let fleet = self.fleet.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<String> = fleet
            .vehicles
            .iter()
            .filter(|(_, a)| **a == availability)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Number of vehicles observed so far
    pub fn tracked_count(&self) -> usize {
        self.fleet
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .vehicles
            .len()
    }
}

impl std::fmt::Debug for VehicleAwareness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VehicleAwareness")
            .field("tracked", &self.tracked_count())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
