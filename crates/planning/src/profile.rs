//! Vehicle capability profiles
//!
//! A profile names the set of vehicles able to execute a class of plan
//! (a given payload, depth rating, endurance). Profile catalogues are
//! maintained outside this crate and deserialized into [`Profile`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of vehicles eligible for a plan
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier
    pub id: String,
    /// Eligible vehicle identifiers
    #[serde(default)]
    pub vehicles: BTreeSet<String>,
}

impl Profile {
    /// Create a profile from a list of vehicle ids
    pub fn new<I, S>(id: impl Into<String>, vehicles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            vehicles: vehicles.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the vehicle is part of this profile
    pub fn contains(&self, vehicle_id: &str) -> bool {
        self.vehicles.contains(vehicle_id)
    }

    /// Eligible vehicles in sorted order
    pub fn vehicles(&self) -> impl Iterator<Item = &str> {
        self.vehicles.iter().map(String::as_str)
    }

    /// Whether no vehicle is eligible
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
