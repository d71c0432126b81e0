use serde::{Deserialize, Serialize};

/// Whether a student may be marked present, with the figures shown to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInVerdict {
    pub present: bool,
    pub distance_meters: f64,
    pub formatted_distance: String,
    pub allowed_radius_meters: f64,
    pub message: String,
}
