//! Core library for the `yr` forecast CLI.
//!
//! This crate defines:
//! - Validation of user supplied coordinates
//! - The request URL for the api.met.no locationforecast endpoint
//! - Fetching the forecast over HTTP behind a [`Transport`] seam
//! - Extraction of a flat [`ForecastResult`] from the response
//!
//! It is used by `yr-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod coords;
pub mod error;
pub mod extract;
pub mod model;
pub mod transport;
pub mod url;

pub use client::{ForecastClient, Stage};
pub use config::{ClientConfig, DEFAULT_USER_AGENT};
pub use coords::{
    Axis, CoordInput, Coordinate, validate_altitude, validate_latitude, validate_longitude,
};
pub use error::{ConfigError, CoordError, Error, ParseError, TransportError};
pub use extract::extract_forecast;
pub use model::ForecastResult;
pub use transport::{HttpTransport, Transport, fetch_forecast};
pub use url::{BASE_URL, build_request_url, build_request_url_with_base};
