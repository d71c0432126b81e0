use crate::geo::consts::DEFAULT_RADIUS_METERS;
use crate::geo::{calculate_distance, check_proximity, format_distance};
use crate::proximity::requests::{DistanceRequest, ProximityCheckRequest};
use crate::proximity::responses::{DistanceResponse, ProximityCheckResponse};
use axum::response::Json;

#[axum::debug_handler]
pub async fn distance(Json(request): Json<DistanceRequest>) -> Json<DistanceResponse> {
    let distance_meters = calculate_distance(request.from, request.to);
    Json(DistanceResponse {
        distance_meters,
        formatted_distance: format_distance(distance_meters),
    })
}

#[axum::debug_handler]
pub async fn check_radius(
    Json(request): Json<ProximityCheckRequest>,
) -> Json<ProximityCheckResponse> {
    let radius_meters = request.radius_meters.unwrap_or(DEFAULT_RADIUS_METERS);
    let check = check_proximity(request.student, request.reference, Some(radius_meters));
    Json(ProximityCheckResponse {
        within_radius: check.within_radius,
        distance_meters: check.distance_meters,
        formatted_distance: format_distance(check.distance_meters),
        radius_meters,
    })
}
