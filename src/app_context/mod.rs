use crate::cli::Args;
use crate::location::provider::{PermissionState, PositionErrorCode};
use crate::location::providers::{FailingLocationProvider, StaticLocationProvider};
use crate::location::LocationService;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppContext {
    pub location: LocationService,
}

pub fn init(args: &Args) -> AppContext {
    let location = match (args.device_error_code, args.device_location) {
        (Some(code), _) => {
            let code = PositionErrorCode::from_code(code);
            tracing::warn!(?code, "Every device location request will fail.");
            LocationService::new(Arc::new(FailingLocationProvider::new(code)))
        }
        (None, Some(coordinate)) => {
            let permission = PermissionState::from(args.device_permission);
            tracing::info!(%coordinate, ?permission, "Using a fixed device location.");
            LocationService::new(Arc::new(StaticLocationProvider::new(coordinate, permission)))
        }
        (None, None) => {
            tracing::warn!("No device location configured. Location requests will fail.");
            LocationService::unsupported()
        }
    };
    AppContext { location }
}
