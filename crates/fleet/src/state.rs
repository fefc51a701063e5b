//! Vehicle state signals
//!
//! The console reports every vehicle as being in one of a fixed set of
//! operational states. Only `Finished` and `Service` matter for
//! availability; everything else means the vehicle is busy or unreachable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational state reported for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleState {
    /// Idle and ready for commands
    Service,
    /// Running sensor calibration
    Calibration,
    /// Reporting an error condition
    Error,
    /// Executing a maneuver or plan
    Maneuver,
    /// Under external control
    External,
    /// Booting
    Boot,
    /// Being teleoperated
    Teleoperation,
    /// Link just established
    Connected,
    /// Link lost
    Disconnected,
    /// Completed its plan
    Finished,
    /// Any state label this crate does not recognise
    Unknown,
}

impl VehicleState {
    /// Label used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleState::Service => "SERVICE",
            VehicleState::Calibration => "CALIBRATION",
            VehicleState::Error => "ERROR",
            VehicleState::Maneuver => "MANEUVER",
            VehicleState::External => "EXTERNAL",
            VehicleState::Boot => "BOOT",
            VehicleState::Teleoperation => "TELEOPERATION",
            VehicleState::Connected => "CONNECTED",
            VehicleState::Disconnected => "DISCONNECTED",
            VehicleState::Finished => "FINISHED",
            VehicleState::Unknown => "UNKNOWN",
        }
    }

    /// Parse a state label, case-insensitively. Unrecognised labels map to
    /// [`VehicleState::Unknown`] rather than failing.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "SERVICE" => VehicleState::Service,
            "CALIBRATION" => VehicleState::Calibration,
            "ERROR" => VehicleState::Error,
            "MANEUVER" => VehicleState::Maneuver,
            "EXTERNAL" => VehicleState::External,
            "BOOT" => VehicleState::Boot,
            "TELEOPERATION" => VehicleState::Teleoperation,
            "CONNECTED" => VehicleState::Connected,
            "DISCONNECTED" => VehicleState::Disconnected,
            "FINISHED" => VehicleState::Finished,
            _ => VehicleState::Unknown,
        }
    }
}

impl FromStr for VehicleState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle changed operational state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStateChanged {
    /// Vehicle identifier
    pub vehicle_id: String,
    /// New state
    pub state: VehicleState,
    /// Free-text detail supplied by the vehicle, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VehicleStateChanged {
    /// Create a new state change event
    pub fn new(vehicle_id: impl Into<String>, state: VehicleState) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            state,
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        assert_eq!(VehicleState::parse("FINISHED"), VehicleState::Finished);
        assert_eq!(VehicleState::parse("service"), VehicleState::Service);
        assert_eq!(" Maneuver ".parse::<VehicleState>().unwrap(), VehicleState::Maneuver);
    }

    #[test]
    fn test_parse_unknown_label() {
        assert_eq!(VehicleState::parse("HOVERING"), VehicleState::Unknown);
        assert_eq!(VehicleState::parse(""), VehicleState::Unknown);
    }

    #[test]
    fn test_label_round_trip() {
        for state in [
            VehicleState::Service,
            VehicleState::Calibration,
            VehicleState::Error,
            VehicleState::Maneuver,
            VehicleState::External,
            VehicleState::Boot,
            VehicleState::Teleoperation,
            VehicleState::Connected,
            VehicleState::Disconnected,
            VehicleState::Finished,
        ] {
            assert_eq!(VehicleState::parse(state.as_str()), state);
        }
    }

    #[test]
    fn test_event_serialization() {
        let event = VehicleStateChanged::new("lauv-xplore-1", VehicleState::Service)
            .with_description("surface");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"state\":\"SERVICE\""));

        let parsed: VehicleStateChanged = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);

        let bare: VehicleStateChanged =
            serde_json::from_str(r#"{"vehicle_id":"v","state":"FINISHED"}"#).unwrap();
        assert_eq!(bare.description, None);
    }
}
