use attendance_geofence::cli::Args;
use attendance_geofence::{app_context, logging};
use clap::Parser;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(&args);
    let app_context = app_context::init(&args);
    let router = attendance_geofence::http::router::new(&args, app_context);

    let listener = TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(listen_address = %args.listen_address, "Serving.");
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
