/// Mean Earth radius used by the Haversine formula, in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Allowed distance from the reference point when the caller doesn't specify one.
pub const DEFAULT_RADIUS_METERS: f64 = 100.0;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
