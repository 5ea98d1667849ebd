use super::location::Location;
use chrono::NaiveDateTime;

/// What a trigger handler hands to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Location already known (remote device message).
    Location(Location),
    /// Bounding-box centre from the detector, in pixels.
    Centroid { x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawObservation {
    pub timestamp: NaiveDateTime,
    pub reading: Reading,
}

impl RawObservation {
    pub fn located(timestamp: NaiveDateTime, location: Location) -> Self {
        Self {
            timestamp,
            reading: Reading::Location(location),
        }
    }

    pub fn centroid(timestamp: NaiveDateTime, x: f64, y: f64) -> Self {
        Self {
            timestamp,
            reading: Reading::Centroid { x, y },
        }
    }
}
