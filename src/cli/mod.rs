use crate::geo::models::Coordinate;
use crate::location::provider::PermissionState;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Origin allowed to call the API from a browser. May be repeated.
    #[arg(long = "allowed-origin")]
    #[arg(default_values_t = [String::from("http://127.0.0.1:3000"), String::from("http://localhost:3000")])]
    pub allowed_origins: Vec<String>,
    /// Position reported by this host as `LAT,LNG`. Without it the host has no location capability.
    #[arg(long, allow_hyphen_values = true)]
    pub device_location: Option<Coordinate>,
    #[arg(long, value_enum)]
    #[arg(default_value_t = DevicePermission::Granted)]
    pub device_permission: DevicePermission,
    /// Makes every position request fail with this platform error code (1 denied,
    /// 2 unavailable, 3 timeout). Takes precedence over `--device-location`.
    #[arg(long)]
    pub device_error_code: Option<u16>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DevicePermission {
    Granted,
    Prompt,
    Denied,
}

impl From<DevicePermission> for PermissionState {
    fn from(permission: DevicePermission) -> Self {
        match permission {
            DevicePermission::Granted => PermissionState::Granted,
            DevicePermission::Prompt => PermissionState::Prompt,
            DevicePermission::Denied => PermissionState::Denied,
        }
    }
}
