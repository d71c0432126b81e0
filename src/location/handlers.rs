use crate::app_context::AppContext;
use crate::attendance::verify_check_in;
use crate::location::models::PermissionResult;
use crate::location::requests::DeviceCheckInRequest;
use crate::location::responses::{CurrentLocationResponse, DeviceCheckInResponse};
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn permission(State(app_context): State<AppContext>) -> Json<PermissionResult> {
    Json(app_context.location.request_location_permission().await)
}

#[axum::debug_handler]
pub async fn current(State(app_context): State<AppContext>) -> Json<CurrentLocationResponse> {
    let result = app_context.location.get_current_location().await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "Failed to acquire the device location.");
    }
    Json(CurrentLocationResponse::from(result))
}

/// Checks the device in against a session location using its current position.
#[axum::debug_handler]
pub async fn check_in(
    State(app_context): State<AppContext>,
    Json(request): Json<DeviceCheckInRequest>,
) -> Json<DeviceCheckInResponse> {
    let response = match app_context.location.get_current_location().await {
        Ok(student) => DeviceCheckInResponse {
            error: false,
            error_code: None,
            message: None,
            verdict: Some(verify_check_in(
                student,
                request.session_location,
                request.radius_meters,
            )),
        },
        Err(err) => {
            tracing::warn!(error = %err, "Check-in aborted, no device location.");
            DeviceCheckInResponse {
                error: true,
                error_code: Some(err.into()),
                message: Some(err.to_string()),
                verdict: None,
            }
        }
    };
    Json(response)
}
