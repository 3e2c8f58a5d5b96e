use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use inquire::Text;
use log::LevelFilter;
use yr_core::{ClientConfig, CoordInput, Coordinate, ForecastClient};

use crate::report::Report;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "yr", version, about = "Weather forecast from yr.no for a coordinate")]
pub struct Cli {
    /// Latitude in degrees, -85 to 85. Prompted for when absent.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude in degrees, -180 to 180. Prompted for when absent.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<String>,

    /// Altitude in meters. Prompted for when absent; blank means sea level.
    #[arg(long, allow_hyphen_values = true)]
    pub alt: Option<String>,

    /// Print the forecast as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Identifying User-Agent sent to api.met.no.
    #[arg(long)]
    pub user_agent: Option<String>,

    /// More log output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    pub async fn run(self) -> Result<()> {
        let mut config = ClientConfig::default();
        if let Some(agent) = &self.user_agent {
            config = config.with_user_agent(agent.as_str())?;
        }
        if config.has_default_user_agent() {
            log::info!("no --user-agent given, api.met.no asks clients to include a contact");
        }

        let lat = input_or_prompt(self.lat.as_deref(), "Latitude:", "-85 to 85 degrees")?;
        let lon = input_or_prompt(self.lon.as_deref(), "Longitude:", "-180 to 180 degrees")?;
        let alt = input_or_prompt(self.alt.as_deref(), "Altitude:", "meters, blank for sea level")?;

        let coord = Coordinate::from_inputs(lat, lon, alt)?;

        let mut client = ForecastClient::new(config);
        let forecast = client
            .run(&coord)
            .await
            .context("Failed to get forecast from api.met.no")?;

        if self.json {
            let json = serde_json::to_string_pretty(&forecast)
                .context("Failed to serialize forecast to JSON")?;
            println!("{json}");
        } else {
            print!("{}", Report { coord: &coord, forecast: &forecast });
        }

        Ok(())
    }
}

fn input_or_prompt(value: Option<&str>, label: &str, help: &str) -> Result<CoordInput> {
    let raw = match value {
        Some(v) => v.to_string(),
        None => Text::new(label)
            .with_help_message(help)
            .prompt()
            .with_context(|| format!("Failed to read {}", label.trim_end_matches(':')))?,
    };
    Ok(CoordInput::parse(&raw))
}
