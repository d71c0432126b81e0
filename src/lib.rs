pub mod app_context;
pub mod attendance;
pub mod cli;
pub mod geo;
pub mod health;
pub mod http;
pub mod location;
pub mod logging;
pub mod proximity;
