use crate::geo::models::Coordinate;
use errors::LocationError;
use models::PermissionResult;
use provider::{LocationProvider, PermissionState, PositionOptions};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::oneshot;

pub mod errors;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod providers;
pub mod requests;
pub mod responses;
#[cfg(test)]
mod tests;

/// Acquires the device position through an injected [`LocationProvider`].
///
/// A service without a provider behaves like a platform with no location capability at all.
#[derive(Clone, Default)]
pub struct LocationService {
    provider: Option<Arc<dyn LocationProvider>>,
}

impl LocationService {
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn unsupported() -> Self {
        Self { provider: None }
    }

    pub fn is_supported(&self) -> bool {
        self.provider.is_some()
    }

    /// Checks whether the platform can and will hand out location data.
    ///
    /// Only a missing location capability yields an error message. Failed or unavailable
    /// permission queries are reported as granted, leaving the real failure to
    /// [`Self::get_current_location`].
    pub async fn request_location_permission(&self) -> PermissionResult {
        let Some(provider) = &self.provider else {
            return PermissionResult {
                granted: false,
                error: Some(LocationError::UnsupportedPlatform.to_string()),
            };
        };
        if !provider.supports_permission_query() {
            return PermissionResult::granted();
        }
        match provider.query_permission().await {
            Ok(PermissionState::Granted | PermissionState::Prompt) => PermissionResult::granted(),
            Ok(PermissionState::Denied) => PermissionResult::refused(),
            Err(err) => {
                tracing::debug!(error = %err, "Permission query failed, assuming granted.");
                PermissionResult::granted()
            }
        }
    }

    /// Issues a single position request and waits for the platform to settle it.
    pub async fn get_current_location(&self) -> Result<Coordinate, LocationError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(LocationError::UnsupportedPlatform)?;
        provider
            .current_position(&PositionOptions::FIXED)
            .await
            .map_err(|code| {
                tracing::debug!(?code, "Position request failed.");
                LocationError::from(code)
            })
    }

    /// Same as [`Self::get_current_location`], but the request can be abandoned through the
    /// returned handle. Dropping the handle without calling `cancel` leaves the request running.
    pub fn get_current_location_cancellable(
        &self,
    ) -> (
        CancellationHandle,
        impl Future<Output = Result<Coordinate, LocationError>> + Send + 'static,
    ) {
        let (sender, mut receiver) = oneshot::channel();
        let service = self.clone();
        let request = async move {
            tokio::select! {
                biased;
                Ok(()) = &mut receiver => Err(LocationError::Cancelled),
                result = service.get_current_location() => result,
            }
        };
        (CancellationHandle { sender }, request)
    }
}

#[derive(Debug)]
pub struct CancellationHandle {
    sender: oneshot::Sender<()>,
}

impl CancellationHandle {
    pub fn cancel(self) {
        // The request may have settled already, in which case nobody is listening.
        let _ = self.sender.send(());
    }
}
