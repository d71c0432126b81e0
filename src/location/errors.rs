use crate::location::provider::PositionErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the device location couldn't be obtained. The messages are shown to users verbatim.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Geolocation is not supported by your browser")]
    UnsupportedPlatform,
    #[error("Location permission denied. Please enable location access.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("Location request timed out.")]
    RequestTimeout,
    #[error("Unable to get your location")]
    UnknownLocationFailure,
    #[error("Location request was cancelled.")]
    Cancelled,
}

impl From<PositionErrorCode> for LocationError {
    fn from(code: PositionErrorCode) -> Self {
        match code {
            PositionErrorCode::PermissionDenied => Self::PermissionDenied,
            PositionErrorCode::PositionUnavailable => Self::PositionUnavailable,
            PositionErrorCode::Timeout => Self::RequestTimeout,
            PositionErrorCode::Other(_) => Self::UnknownLocationFailure,
        }
    }
}

/// Machine-readable counterpart of [`LocationError`] for HTTP responses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationErrorCode {
    UnsupportedPlatform,
    PermissionDenied,
    PositionUnavailable,
    RequestTimeout,
    UnknownLocationFailure,
    Cancelled,
}

impl From<LocationError> for LocationErrorCode {
    fn from(error: LocationError) -> Self {
        match error {
            LocationError::UnsupportedPlatform => Self::UnsupportedPlatform,
            LocationError::PermissionDenied => Self::PermissionDenied,
            LocationError::PositionUnavailable => Self::PositionUnavailable,
            LocationError::RequestTimeout => Self::RequestTimeout,
            LocationError::UnknownLocationFailure => Self::UnknownLocationFailure,
            LocationError::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermissionQueryError {
    #[error("the location provider can't report its permission state")]
    Unsupported,
    #[error("permission query failed: {0}")]
    Failed(String),
}
