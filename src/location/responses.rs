use crate::attendance::models::CheckInVerdict;
use crate::geo::models::Coordinate;
use crate::location::errors::{LocationError, LocationErrorCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLocationResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LocationErrorCode>,
    /// Human-readable failure, meant to be shown to the user as is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

impl From<Result<Coordinate, LocationError>> for CurrentLocationResponse {
    fn from(result: Result<Coordinate, LocationError>) -> Self {
        match result {
            Ok(coordinate) => Self {
                error: false,
                error_code: None,
                message: None,
                coordinate: Some(coordinate),
            },
            Err(err) => Self {
                error: true,
                error_code: Some(err.into()),
                message: Some(err.to_string()),
                coordinate: None,
            },
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCheckInResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LocationErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<CheckInVerdict>,
}
