use crate::app_context::{self, AppContext};
use crate::cli::tests::fake_args;
use crate::http::router;
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    let args = fake_args();
    let app_context = app_context::init(&args);
    test_server_with(app_context)
}

pub fn test_server_with(app_context: AppContext) -> TestServer {
    let router = router::new(&fake_args(), app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
