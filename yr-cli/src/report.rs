use std::fmt;

use yr_core::{Coordinate, ForecastResult};

/// Human-readable forecast report, one field per line.
pub struct Report<'a> {
    pub coord: &'a Coordinate,
    pub forecast: &'a ForecastResult,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let forecast = self.forecast;

        writeln!(f)?;
        writeln!(f, "-------------")?;
        writeln!(f, "YR WEATHER")?;
        writeln!(f, "-------------")?;
        writeln!(
            f,
            "\nThe summary for lat {} and long {} is: {}",
            self.coord.latitude(),
            self.coord.longitude(),
            forecast.forecast_summary
        )?;
        writeln!(f)?;
        if let Some(time) = forecast.forecast_time {
            writeln!(f, "Forecast time: {}", time.format("%Y-%m-%d %H:%M UTC"))?;
        }
        writeln!(f, "Temperature: {}", forecast.temperature)?;
        writeln!(f, "Air pressure at sea level: {}", forecast.air_pressure_at_sea_level)?;
        writeln!(f, "Fraction of cloud cover: {}", forecast.cloud_area_fraction)?;
        writeln!(f, "Relative humidity: {}", forecast.relative_humidity)?;
        writeln!(f, "Wind Direction: {}", forecast.wind_direction)?;
        writeln!(f, "Wind Speed: {}", forecast.wind_speed)?;
        writeln!(f, "Precipitation over the next 6 hours: {}", forecast.precipitation_amount)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn forecast() -> ForecastResult {
        ForecastResult {
            forecast_summary: "\"cloudy\"".to_string(),
            air_pressure_at_sea_level: 1041.5,
            temperature: -6.0,
            cloud_area_fraction: 95.3,
            relative_humidity: 63.4,
            wind_direction: 98.3,
            wind_speed: 4.5,
            precipitation_amount: 0.0,
            forecast_time: None,
            updated_at: None,
        }
    }

    #[test]
    fn renders_fixed_report() {
        let coord = Coordinate::new(50.0, 50.0, 50).unwrap();

        let expected = "\n\
            -------------\n\
            YR WEATHER\n\
            -------------\n\
            \n\
            The summary for lat 50 and long 50 is: \"cloudy\"\n\
            \n\
            Temperature: -6\n\
            Air pressure at sea level: 1041.5\n\
            Fraction of cloud cover: 95.3\n\
            Relative humidity: 63.4\n\
            Wind Direction: 98.3\n\
            Wind Speed: 4.5\n\
            Precipitation over the next 6 hours: 0\n\
            \n";

        assert_eq!(Report { coord: &coord, forecast: &forecast() }.to_string(), expected);
    }

    #[test]
    fn includes_forecast_time_when_known() {
        let coord = Coordinate::new(59.9139, 10.7522, 0).unwrap();
        let mut forecast = forecast();
        forecast.forecast_time = Some(Utc.with_ymd_and_hms(2021, 1, 5, 12, 0, 0).unwrap());

        let report = Report { coord: &coord, forecast: &forecast }.to_string();

        assert!(report.contains("The summary for lat 59.9139 and long 10.7522 is: \"cloudy\""));
        assert!(report.contains("Forecast time: 2021-01-05 12:00 UTC\nTemperature: -6\n"));
    }
}
