use crate::geo::models::Coordinate;
use crate::location::errors::{LocationError, PermissionQueryError};
use crate::location::models::PermissionResult;
use crate::location::provider::{
    LocationProvider, PermissionState, PositionErrorCode, PositionOptions,
};
use crate::location::providers::{FailingLocationProvider, StaticLocationProvider};
use crate::location::LocationService;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

const CLASSROOM: Coordinate = Coordinate::new(48.8566, 2.3522);

/// Records every request and answers with a scripted outcome.
struct FakeProvider {
    permission: Option<Result<PermissionState, PermissionQueryError>>,
    position: Result<Coordinate, PositionErrorCode>,
    requests: AtomicUsize,
    last_options: Mutex<Option<PositionOptions>>,
}

impl FakeProvider {
    fn answering(position: Result<Coordinate, PositionErrorCode>) -> Self {
        Self {
            permission: None,
            position,
            requests: AtomicUsize::new(0),
            last_options: Mutex::new(None),
        }
    }

    fn with_permission(
        mut self,
        permission: Result<PermissionState, PermissionQueryError>,
    ) -> Self {
        self.permission = Some(permission);
        self
    }
}

#[async_trait]
impl LocationProvider for FakeProvider {
    fn supports_permission_query(&self) -> bool {
        self.permission.is_some()
    }

    async fn query_permission(&self) -> Result<PermissionState, PermissionQueryError> {
        self.permission
            .clone()
            .unwrap_or(Err(PermissionQueryError::Unsupported))
    }

    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, PositionErrorCode> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        *self.last_options.lock().unwrap() = Some(*options);
        self.position
    }
}

/// Never settles until released, so cancellation can be observed.
struct StalledProvider {
    release: Arc<Notify>,
}

#[async_trait]
impl LocationProvider for StalledProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, PositionErrorCode> {
        self.release.notified().await;
        Ok(CLASSROOM)
    }
}

fn service_with(provider: FakeProvider) -> (LocationService, Arc<FakeProvider>) {
    let provider = Arc::new(provider);
    (LocationService::new(provider.clone()), provider)
}

#[tokio::test]
async fn permission_without_location_capability() {
    let result = LocationService::unsupported()
        .request_location_permission()
        .await;

    assert_eq!(
        result,
        PermissionResult {
            granted: false,
            error: Some(String::from("Geolocation is not supported by your browser")),
        }
    );
}

#[tokio::test]
async fn permission_follows_queried_state() {
    for (state, granted) in [
        (PermissionState::Granted, true),
        (PermissionState::Prompt, true),
        (PermissionState::Denied, false),
    ] {
        let (service, _) = service_with(FakeProvider::answering(Ok(CLASSROOM)).with_permission(Ok(state)));
        let result = service.request_location_permission().await;
        assert_eq!(result.granted, granted, "state {state:?}");
        assert_eq!(result.error, None);
    }
}

#[tokio::test]
async fn permission_is_optimistic_without_query_capability() {
    let (service, _) = service_with(FakeProvider::answering(Err(PositionErrorCode::PermissionDenied)));

    assert_eq!(
        service.request_location_permission().await,
        PermissionResult::granted()
    );
}

#[tokio::test]
async fn permission_is_optimistic_when_query_fails() {
    let (service, _) = service_with(
        FakeProvider::answering(Ok(CLASSROOM))
            .with_permission(Err(PermissionQueryError::Failed(String::from("boom")))),
    );

    assert_eq!(
        service.request_location_permission().await,
        PermissionResult::granted()
    );
}

#[tokio::test]
async fn current_location_uses_fixed_request_options() {
    let (service, provider) = service_with(FakeProvider::answering(Ok(CLASSROOM)));

    assert_eq!(service.get_current_location().await, Ok(CLASSROOM));

    let options = provider.last_options.lock().unwrap().unwrap();
    assert!(options.enable_high_accuracy);
    assert_eq!(options.timeout.as_millis(), 10_000);
    assert!(options.maximum_age.is_zero());
}

#[tokio::test]
async fn current_location_without_capability() {
    let error = LocationService::unsupported()
        .get_current_location()
        .await
        .unwrap_err();

    assert_eq!(error, LocationError::UnsupportedPlatform);
    assert_eq!(error.to_string(), "Geolocation is not supported by your browser");
}

#[tokio::test]
async fn platform_codes_become_readable_messages() {
    let cases = [
        (
            PositionErrorCode::PermissionDenied,
            "Location permission denied. Please enable location access.",
        ),
        (
            PositionErrorCode::PositionUnavailable,
            "Location information is unavailable.",
        ),
        (PositionErrorCode::Timeout, "Location request timed out."),
        (PositionErrorCode::Other(42), "Unable to get your location"),
    ];
    for (code, message) in cases {
        let service = LocationService::new(Arc::new(FailingLocationProvider::new(code)));
        let error = service.get_current_location().await.unwrap_err();
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn numeric_platform_codes() {
    assert_eq!(PositionErrorCode::from_code(1), PositionErrorCode::PermissionDenied);
    assert_eq!(PositionErrorCode::from_code(2), PositionErrorCode::PositionUnavailable);
    assert_eq!(PositionErrorCode::from_code(3), PositionErrorCode::Timeout);
    assert_eq!(PositionErrorCode::from_code(0), PositionErrorCode::Other(0));
}

#[tokio::test]
async fn failures_are_not_retried() {
    let (service, provider) = service_with(FakeProvider::answering(Err(PositionErrorCode::Timeout)));

    let _ = service.get_current_location().await;

    assert_eq!(provider.requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn concurrent_calls_each_reach_the_provider() {
    let (service, provider) = service_with(FakeProvider::answering(Ok(CLASSROOM)));

    let (first, second) = tokio::join!(service.get_current_location(), service.get_current_location());

    assert_eq!(first, Ok(CLASSROOM));
    assert_eq!(second, Ok(CLASSROOM));
    assert_eq!(provider.requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn static_provider_honours_denied_permission() {
    let service = LocationService::new(Arc::new(StaticLocationProvider::new(
        CLASSROOM,
        PermissionState::Denied,
    )));

    assert_eq!(
        service.request_location_permission().await,
        PermissionResult::refused()
    );
    assert_eq!(
        service.get_current_location().await,
        Err(LocationError::PermissionDenied)
    );
}

#[tokio::test]
async fn cancelled_request_settles_with_cancellation() {
    let release = Arc::new(Notify::new());
    let service = LocationService::new(Arc::new(StalledProvider {
        release: release.clone(),
    }));

    let (handle, request) = service.get_current_location_cancellable();
    let request = tokio::spawn(request);
    handle.cancel();

    assert_eq!(request.await.unwrap(), Err(LocationError::Cancelled));
}

#[tokio::test]
async fn dropping_the_handle_does_not_cancel() {
    let release = Arc::new(Notify::new());
    let service = LocationService::new(Arc::new(StalledProvider {
        release: release.clone(),
    }));

    let (handle, request) = service.get_current_location_cancellable();
    drop(handle);
    let request = tokio::spawn(request);
    tokio::task::yield_now().await;
    release.notify_one();

    assert_eq!(request.await.unwrap(), Ok(CLASSROOM));
}

mod endpoints {
    use crate::app_context::AppContext;
    use crate::cli::tests::FAKE_DEVICE_LOCATION;
    use crate::geo::models::Coordinate;
    use crate::http::tests::{test_server, test_server_with};
    use crate::location::errors::LocationErrorCode;
    use crate::location::models::PermissionResult;
    use crate::location::provider::{PermissionState, PositionErrorCode};
    use crate::location::providers::{FailingLocationProvider, StaticLocationProvider};
    use crate::location::requests::DeviceCheckInRequest;
    use crate::location::responses::{CurrentLocationResponse, DeviceCheckInResponse};
    use crate::location::LocationService;
    use std::sync::Arc;

    fn server_without_location() -> axum_test::TestServer {
        test_server_with(AppContext::default())
    }

    #[tokio::test]
    async fn test_permission_without_device_location() {
        let server = server_without_location();

        let response = server.get("/location/permission").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "granted": false,
            "error": "Geolocation is not supported by your browser",
        }));
    }

    #[tokio::test]
    async fn test_permission_omits_error_when_granted() {
        let server = test_server();

        let response = server.get("/location/permission").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "granted": true }));
        assert_eq!(
            response.json::<PermissionResult>(),
            PermissionResult::granted()
        );
    }

    #[tokio::test]
    async fn test_current_location() {
        let server = test_server();

        let response = server.get("/location/current").await;

        response.assert_status_ok();
        let body = response.json::<CurrentLocationResponse>();
        assert!(!body.error);
        let coordinate = body.coordinate.expect("coordinate is missing");
        assert!((coordinate.latitude - FAKE_DEVICE_LOCATION.latitude).abs() < 1e-9);
        assert!((coordinate.longitude - FAKE_DEVICE_LOCATION.longitude).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_current_location_timeout() {
        let server = test_server_with(AppContext {
            location: LocationService::new(Arc::new(FailingLocationProvider::new(
                PositionErrorCode::Timeout,
            ))),
        });

        let response = server.get("/location/current").await;

        response.assert_status_ok();
        response.assert_json(&CurrentLocationResponse {
            error: true,
            error_code: Some(LocationErrorCode::RequestTimeout),
            message: Some(String::from("Location request timed out.")),
            coordinate: None,
        });
    }

    #[tokio::test]
    async fn test_device_check_in() {
        let server = test_server_with(AppContext {
            location: LocationService::new(Arc::new(StaticLocationProvider::new(
                Coordinate::new(0.0, 0.0004),
                PermissionState::Prompt,
            ))),
        });

        let response = server
            .post("/location/check-in")
            .json(&DeviceCheckInRequest {
                session_location: Coordinate::new(0.0, 0.0),
                radius_meters: None,
            })
            .await;

        response.assert_status_ok();
        let body = response.json::<DeviceCheckInResponse>();
        assert!(!body.error);
        let verdict = body.verdict.expect("verdict is missing");
        assert!(verdict.present);
        assert_eq!(verdict.formatted_distance, "44m");
    }

    #[tokio::test]
    async fn test_device_check_in_with_denied_permission() {
        let server = test_server_with(AppContext {
            location: LocationService::new(Arc::new(StaticLocationProvider::new(
                FAKE_DEVICE_LOCATION,
                PermissionState::Denied,
            ))),
        });

        let response = server
            .post("/location/check-in")
            .json(&DeviceCheckInRequest {
                session_location: FAKE_DEVICE_LOCATION,
                radius_meters: Some(10.0),
            })
            .await;

        response.assert_status_ok();
        response.assert_json(&DeviceCheckInResponse {
            error: true,
            error_code: Some(LocationErrorCode::PermissionDenied),
            message: Some(String::from(
                "Location permission denied. Please enable location access.",
            )),
            verdict: None,
        });
    }
}
