use consts::{DEFAULT_RADIUS_METERS, EARTH_RADIUS, METERS_PER_KILOMETER};
use models::{Coordinate, ProximityCheck};

pub mod consts;
pub mod models;

/// Great-circle distance between two coordinates in meters (Haversine formula).
pub fn calculate_distance(a: Coordinate, b: Coordinate) -> f64 {
    let phi_1 = a.latitude.to_radians();
    let phi_2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (h.sqrt().atan2((1.0 - h).sqrt()));
    EARTH_RADIUS * c
}

/// Whether `student` is at most `radius_meters` (inclusive) away from `reference`.
///
/// `None` falls back to [`DEFAULT_RADIUS_METERS`].
pub fn is_within_radius(
    student: Coordinate,
    reference: Coordinate,
    radius_meters: Option<f64>,
) -> bool {
    check_proximity(student, reference, radius_meters).within_radius
}

/// Computes the distance once and tests it against the radius, which defaults to
/// [`DEFAULT_RADIUS_METERS`]. [`is_within_radius`] is the boolean-only shorthand.
pub fn check_proximity(
    student: Coordinate,
    reference: Coordinate,
    radius_meters: Option<f64>,
) -> ProximityCheck {
    let radius_meters = radius_meters.unwrap_or(DEFAULT_RADIUS_METERS);
    let distance_meters = calculate_distance(student, reference);
    ProximityCheck {
        within_radius: distance_meters <= radius_meters,
        distance_meters,
    }
}

/// Renders a distance as `"45m"` below one kilometer and as `"1.2km"` otherwise.
pub fn format_distance(meters: f64) -> String {
    if meters < METERS_PER_KILOMETER {
        // `f64::round` rounds half away from zero.
        return format!("{}m", meters.round());
    }
    // Tenths are rounded half away from zero too, `{:.1}` alone would round ties to even.
    let kilometers = (meters / METERS_PER_KILOMETER * 10.0).round() / 10.0;
    format!("{kilometers:.1}km")
}
