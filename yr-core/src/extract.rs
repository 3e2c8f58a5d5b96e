//! Extraction of a [`ForecastResult`] from a locationforecast response.
//!
//! Only the first timeseries entry is read. Every lookup goes through a JSON
//! pointer so a missing segment is reported with the full path that failed.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{error::ParseError, model::ForecastResult};

const INSTANT_DETAILS: &str = "/properties/timeseries/0/data/instant/details";
const SYMBOL_CODE: &str = "/properties/timeseries/0/data/next_6_hours/summary/symbol_code";
const PRECIPITATION: &str = "/properties/timeseries/0/data/next_6_hours/details/precipitation_amount";
const FORECAST_TIME: &str = "/properties/timeseries/0/time";
const UPDATED_AT: &str = "/properties/meta/updated_at";

/// Parse `body` and pull out the fields of the nearest forecast time.
///
/// Malformed JSON fails immediately; nothing is returned half filled.
pub fn extract_forecast(body: &str) -> Result<ForecastResult, ParseError> {
    let doc: Value = serde_json::from_str(body)?;

    let details = lookup(&doc, INSTANT_DETAILS)?;
    let summary = lookup(&doc, SYMBOL_CODE)?;

    Ok(ForecastResult {
        // Serialized form on purpose: a string keeps its quotes.
        forecast_summary: summary.to_string(),
        air_pressure_at_sea_level: detail(details, "air_pressure_at_sea_level")?,
        temperature: detail(details, "air_temperature")?,
        cloud_area_fraction: detail(details, "cloud_area_fraction")?,
        relative_humidity: detail(details, "relative_humidity")?,
        wind_direction: detail(details, "wind_from_direction")?,
        wind_speed: detail(details, "wind_speed")?,
        precipitation_amount: number(lookup(&doc, PRECIPITATION)?, PRECIPITATION)?,
        forecast_time: timestamp(&doc, FORECAST_TIME),
        updated_at: timestamp(&doc, UPDATED_AT),
    })
}

fn lookup<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Value, ParseError> {
    doc.pointer(pointer)
        .ok_or_else(|| ParseError::MissingField { pointer: pointer.to_string() })
}

fn detail(details: &Value, field: &str) -> Result<f64, ParseError> {
    let pointer = format!("{INSTANT_DETAILS}/{field}");
    let value = details
        .get(field)
        .ok_or_else(|| ParseError::MissingField { pointer: pointer.clone() })?;
    number(value, &pointer)
}

fn number(value: &Value, pointer: &str) -> Result<f64, ParseError> {
    value
        .as_f64()
        .ok_or_else(|| ParseError::NotANumber { pointer: pointer.to_string() })
}

fn timestamp(doc: &Value, pointer: &str) -> Option<DateTime<Utc>> {
    let raw = doc.pointer(pointer)?.as_str()?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(err) => {
            log::debug!("ignoring unparseable timestamp at {pointer}: {raw} ({err})");
            None
        }
    }
}
