//! Plan assignments
//!
//! A [`PlanTask`] binds a plan body to the profile of vehicles allowed to
//! run it. The allocator owns tasks; it refreshes a standing task in place
//! with [`PlanTask::set_plan`] and [`PlanTask::set_timestamp`] instead of
//! issuing a new id.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Plan body bound to a vehicle profile and a freshness timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTask<P = serde_json::Value> {
    plan_id: String,
    plan: P,
    profile: Profile,
    /// Epoch seconds
    timestamp: f64,
}

impl<P> PlanTask<P> {
    /// Create a new plan task
    pub fn new(plan_id: impl Into<String>, plan: P, profile: Profile, timestamp: f64) -> Self {
        Self {
            plan_id: plan_id.into(),
            plan,
            profile,
            timestamp,
        }
    }

    /// Task identifier
    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    /// Plan body
    pub fn plan(&self) -> &P {
        &self.plan
    }

    /// Vehicles eligible for this task
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Freshness timestamp in epoch seconds
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// Refresh the timestamp
    pub fn set_timestamp(&mut self, timestamp: f64) {
        self.timestamp = timestamp;
    }

    /// Replace the plan body, returning the previous one
    pub fn set_plan(&mut self, plan: P) -> P {
        std::mem::replace(&mut self.plan, plan)
    }

    /// Whether the vehicle can execute this task with the required profile
    pub fn contains_vehicle(&self, vehicle_id: &str) -> bool {
        self.profile.contains(vehicle_id)
    }

    /// Profile vehicles accepted by `is_available`, in sorted order
    pub fn eligible_vehicles<F>(&self, mut is_available: F) -> Vec<&str>
    where
        F: FnMut(&str) -> bool,
    {
        self.profile.vehicles().filter(|id| is_available(*id)).collect()
    }

    /// Whether the task is older than `max_age_secs` at `now_secs`.
    ///
    /// A timestamp in the future (clock skew) is never stale.
    pub fn is_stale(&self, now_secs: f64, max_age_secs: f64) -> bool {
        if now_secs < self.timestamp {
            return false;
        }
        now_secs - self.timestamp > max_age_secs
    }
}
