use crate::geo::consts::DEFAULT_RADIUS_METERS;
use crate::geo::models::Coordinate;
use crate::geo::{check_proximity, format_distance};
use models::CheckInVerdict;

pub mod handlers;
pub mod models;
pub mod requests;

/// Decides whether a student standing at `student` is close enough to the location recorded
/// when the session was started.
pub fn verify_check_in(
    student: Coordinate,
    session_location: Coordinate,
    radius_meters: Option<f64>,
) -> CheckInVerdict {
    let allowed_radius_meters = radius_meters.unwrap_or(DEFAULT_RADIUS_METERS);
    let check = check_proximity(student, session_location, Some(allowed_radius_meters));
    let formatted_distance = format_distance(check.distance_meters);
    let message = if check.within_radius {
        format!("You are within range of the class location ({formatted_distance}).")
    } else {
        format!(
            "You are {formatted_distance} away from the class location. Move within {} to check in.",
            format_distance(allowed_radius_meters)
        )
    };
    tracing::debug!(
        present = check.within_radius,
        distance_meters = check.distance_meters,
        allowed_radius_meters,
        "Verified check-in."
    );
    CheckInVerdict {
        present: check.within_radius,
        distance_meters: check.distance_meters,
        formatted_distance,
        allowed_radius_meters,
        message,
    }
}
