use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A point on the Earth's surface, in degrees.
///
/// Values outside the nominal `[-90, 90]` / `[-180, 180]` ranges are accepted as is.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateParseError {
    #[error("expected `LAT,LNG`, got `{0}`")]
    MissingSeparator(String),
    #[error("`{0}` is not a valid number of degrees")]
    InvalidNumber(String),
}

/// Parses the `LAT,LNG` form used on the command line.
impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (latitude, longitude) = s
            .split_once(',')
            .ok_or_else(|| CoordinateParseError::MissingSeparator(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| CoordinateParseError::InvalidNumber(part.trim().to_string()))
        };
        Ok(Self::new(parse(latitude)?, parse(longitude)?))
    }
}

/// Outcome of comparing two coordinates against an allowed radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityCheck {
    pub within_radius: bool,
    pub distance_meters: f64,
}
