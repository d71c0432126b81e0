use crate::geo::models::Coordinate;
use crate::location::errors::PermissionQueryError;
use crate::location::provider::{
    LocationProvider, PermissionState, PositionErrorCode, PositionOptions,
};
use async_trait::async_trait;

/// A device that always reports the same position, e.g. a classroom kiosk.
#[derive(Copy, Clone, Debug)]
pub struct StaticLocationProvider {
    coordinate: Coordinate,
    permission: PermissionState,
}

impl StaticLocationProvider {
    pub fn new(coordinate: Coordinate, permission: PermissionState) -> Self {
        Self {
            coordinate,
            permission,
        }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    fn supports_permission_query(&self) -> bool {
        true
    }

    async fn query_permission(&self) -> Result<PermissionState, PermissionQueryError> {
        Ok(self.permission)
    }

    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, PositionErrorCode> {
        match self.permission {
            PermissionState::Denied => Err(PositionErrorCode::PermissionDenied),
            PermissionState::Granted | PermissionState::Prompt => Ok(self.coordinate),
        }
    }
}

/// A device whose every fix fails with the same platform code.
#[derive(Copy, Clone, Debug)]
pub struct FailingLocationProvider {
    code: PositionErrorCode,
}

impl FailingLocationProvider {
    pub fn new(code: PositionErrorCode) -> Self {
        Self { code }
    }
}

#[async_trait]
impl LocationProvider for FailingLocationProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, PositionErrorCode> {
        Err(self.code)
    }
}
