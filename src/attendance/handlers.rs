use crate::attendance::models::CheckInVerdict;
use crate::attendance::requests::CheckInRequest;
use crate::attendance::verify_check_in;
use axum::response::Json;

#[axum::debug_handler]
pub async fn check_in(Json(request): Json<CheckInRequest>) -> Json<CheckInVerdict> {
    Json(verify_check_in(
        request.student,
        request.session_location,
        request.radius_meters,
    ))
}
