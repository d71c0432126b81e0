use crate::geo::models::Coordinate;
use crate::location::errors::PermissionQueryError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request configuration handed to the platform with every position fetch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// How old a cached fix may be; zero means a fresh fix is always required.
    pub maximum_age: Duration,
}

impl PositionOptions {
    pub const FIXED: Self = Self {
        enable_high_accuracy: true,
        timeout: Duration::from_millis(10_000),
        maximum_age: Duration::ZERO,
    };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
}

/// Failure reported by the platform for a position fetch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Other(u16),
}

impl PositionErrorCode {
    /// Maps the numeric codes used by browser geolocation (`1`, `2`, `3`).
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            other => Self::Other(other),
        }
    }
}

/// Location capability supplied by the host environment.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    fn supports_permission_query(&self) -> bool {
        false
    }

    async fn query_permission(&self) -> Result<PermissionState, PermissionQueryError> {
        Err(PermissionQueryError::Unsupported)
    }

    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, PositionErrorCode>;
}
