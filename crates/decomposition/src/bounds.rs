//! Corner coordinates of a rectangular operational area.

use mvplan_core::{GeoCoordinate, Geodesy};
use serde::{Deserialize, Serialize};

/// The four corners of a grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    /// North-west corner
    pub top_left: GeoCoordinate,
    /// North-east corner
    pub top_right: GeoCoordinate,
    /// South-west corner
    pub bottom_left: GeoCoordinate,
    /// South-east corner
    pub bottom_right: GeoCoordinate,
}

impl GridBounds {
    /// Corners of a `width` x `height` meter rectangle centered on `center`.
    ///
    /// Each corner is the center offset by half the width east or west and
    /// half the height north or south.
    pub fn compute(geodesy: &dyn Geodesy, center: &GeoCoordinate, width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;

        Self {
            top_left: geodesy.offset(center, half_height, -half_width),
            top_right: geodesy.offset(center, half_height, half_width),
            bottom_left: geodesy.offset(center, -half_height, -half_width),
            bottom_right: geodesy.offset(center, -half_height, half_width),
        }
    }

    /// Corners in `[top_left, top_right, bottom_left, bottom_right]` order
    pub fn corners(&self) -> [GeoCoordinate; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}
