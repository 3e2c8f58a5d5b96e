//! Validation of user supplied coordinates.
//!
//! Latitude and longitude outside the range the forecast API accepts are
//! rejected with [`CoordError::OutOfRange`]. Text that does not parse as a
//! number is not an error: it is replaced by the default (`0.0` or `0`) and
//! a warning is logged.

use std::{convert::Infallible, fmt, str::FromStr};

use crate::error::CoordError;

pub const LATITUDE_LIMIT: f64 = 85.0;
pub const LONGITUDE_LIMIT: f64 = 180.0;

/// Raw value for a single coordinate, as typed or as passed by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordInput {
    Number(f64),
    Text(String),
}

impl CoordInput {
    /// Classify a token. The words `nan`, `inf` and `infinity` take the same
    /// default path as any other word, while a numeral too large for `f64`
    /// stays a `Number` and is rejected by the range check.
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if !is_float_word(trimmed) => CoordInput::Number(value),
            _ => CoordInput::Text(trimmed.to_string()),
        }
    }
}

fn is_float_word(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    ["nan", "inf", "infinity"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word))
}

impl fmt::Display for CoordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordInput::Number(value) => write!(f, "{value}"),
            CoordInput::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl FromStr for CoordInput {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoordInput::parse(s))
    }
}

impl From<&str> for CoordInput {
    fn from(value: &str) -> Self {
        CoordInput::parse(value)
    }
}

impl From<String> for CoordInput {
    fn from(value: String) -> Self {
        CoordInput::parse(&value)
    }
}

impl From<f64> for CoordInput {
    fn from(value: f64) -> Self {
        CoordInput::Number(value)
    }
}

impl From<f32> for CoordInput {
    fn from(value: f32) -> Self {
        CoordInput::Number(f64::from(value))
    }
}

impl From<i32> for CoordInput {
    fn from(value: i32) -> Self {
        CoordInput::Number(f64::from(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Latitude => "Latitude",
            Axis::Longitude => "Longitude",
        }
    }

    pub const fn limit(&self) -> f64 {
        match self {
            Axis::Latitude => LATITUDE_LIMIT,
            Axis::Longitude => LONGITUDE_LIMIT,
        }
    }

    /// Range check without logging.
    pub fn check(self, value: f64) -> Result<f64, CoordError> {
        let limit = self.limit();
        // NaN fails both comparisons and lands in the error branch.
        if (-limit..=limit).contains(&value) {
            Ok(value)
        } else {
            Err(CoordError::OutOfRange {
                axis: self,
                value,
                min: -limit,
                max: limit,
            })
        }
    }

    fn validate(self, input: CoordInput) -> Result<f64, CoordError> {
        log::info!("{} entered: {input}", self.as_str());

        match input {
            CoordInput::Number(value) => self.check(value),
            CoordInput::Text(_) => {
                log::warn!("{} must be a number, setting to default, 0.0", self.as_str());
                Ok(0.0)
            }
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate_latitude(value: impl Into<CoordInput>) -> Result<f64, CoordError> {
    Axis::Latitude.validate(value.into())
}

pub fn validate_longitude(value: impl Into<CoordInput>) -> Result<f64, CoordError> {
    Axis::Longitude.validate(value.into())
}

/// Altitude in meters. Any number is accepted and truncated toward zero;
/// text falls back to sea level.
pub fn validate_altitude(value: impl Into<CoordInput>) -> i32 {
    let input = value.into();
    log::info!("Altitude entered: {input}");

    match input {
        // `as` saturates at the i32 bounds.
        CoordInput::Number(value) => value.trunc() as i32,
        CoordInput::Text(_) => {
            log::warn!("Altitude must be a number, using sea level as default");
            0
        }
    }
}

/// A location that is known to be accepted by the forecast API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    altitude: i32,
}

impl Coordinate {
    /// Build from values that are already numbers. Only the range is checked,
    /// nothing is echoed to the log.
    pub fn new(latitude: f64, longitude: f64, altitude: i32) -> Result<Self, CoordError> {
        Ok(Self {
            latitude: Axis::Latitude.check(latitude)?,
            longitude: Axis::Longitude.check(longitude)?,
            altitude,
        })
    }

    /// Validate three raw inputs and build a coordinate from them.
    pub fn from_inputs(
        latitude: impl Into<CoordInput>,
        longitude: impl Into<CoordInput>,
        altitude: impl Into<CoordInput>,
    ) -> Result<Self, CoordError> {
        Ok(Self {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
            altitude: validate_altitude(altitude),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> i32 {
        self.altitude
    }
}
