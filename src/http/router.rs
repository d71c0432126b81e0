use crate::app_context::AppContext;
use crate::cli::Args;
use crate::{attendance, health, http, location, proximity};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = http::cors_layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let proximity_routes = Router::new()
        .route("/distance", post(proximity::handlers::distance))
        .route("/check", post(proximity::handlers::check_radius));
    let attendance_routes =
        Router::new().route("/check-in", post(attendance::handlers::check_in));
    let location_routes = Router::new()
        .route("/permission", get(location::handlers::permission))
        .route("/current", get(location::handlers::current))
        .route("/check-in", post(location::handlers::check_in));

    Router::new()
        .nest("/health", health_routes)
        .nest("/proximity", proximity_routes)
        .nest("/attendance", attendance_routes)
        .nest("/location", location_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(http::middleware::tracing))
                .layer(cors_policy),
        )
}
