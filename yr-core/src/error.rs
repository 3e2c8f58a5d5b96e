use thiserror::Error;

use crate::client::Stage;

/// Latitude or longitude outside the range accepted by the forecast API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("{axis} {value} out of bounds, valid range is between {min} and {max} degrees")]
    OutOfRange {
        axis: crate::coords::Axis,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request URL is empty")]
    EmptyUrl,

    /// No transport handle was available. Fatal for the run.
    #[error("no HTTP transport available")]
    NoHandle,

    #[error("failed to send request to {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("forecast request failed with status {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse forecast JSON")]
    Malformed(#[from] serde_json::Error),

    #[error("forecast response is missing `{pointer}`")]
    MissingField { pointer: String },

    #[error("forecast field `{pointer}` is not a number")]
    NotANumber { pointer: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("user agent must not be empty, the forecast API requires clients to identify themselves")]
    EmptyUserAgent,
}

/// Any failure of a forecast run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("forecast client already finished in stage {0}")]
    Finished(Stage),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
