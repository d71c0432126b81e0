use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResponse {
    pub distance_meters: f64,
    pub formatted_distance: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityCheckResponse {
    pub within_radius: bool,
    pub distance_meters: f64,
    pub formatted_distance: String,
    /// The radius that was actually applied.
    pub radius_meters: f64,
}
