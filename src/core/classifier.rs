use crate::models::Location;

/// Side of the door for a detection centre: left of the boundary pixel
/// is inside.
pub fn classify(centroid_x: f64, boundary_x: f64) -> Location {
    if centroid_x < boundary_x {
        Location::In
    } else {
        Location::Out
    }
}

/// Classify a full centroid. The vertical coordinate does not matter for
/// a vertical door frame; it is accepted so detectors can pass what they have.
pub fn classify_centroid(x: f64, _y: f64, boundary_x: f64) -> Location {
    classify(x, boundary_x)
}
