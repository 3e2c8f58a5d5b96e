use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather at the nearest forecast time for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Symbol code exactly as serialized in the response, quotes included.
    pub forecast_summary: String,
    /// hPa
    pub air_pressure_at_sea_level: f64,
    /// °C
    pub temperature: f64,
    pub cloud_area_fraction: f64,
    pub relative_humidity: f64,
    /// Degrees, direction the wind is blowing from.
    pub wind_direction: f64,
    /// m/s
    pub wind_speed: f64,
    /// mm over the next 6 hours.
    pub precipitation_amount: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
