use std::fmt;

use crate::{
    config::ClientConfig,
    coords::Coordinate,
    error::{Error, Result},
    extract::extract_forecast,
    model::ForecastResult,
    transport::{HttpTransport, Transport, fetch_forecast},
    url::build_request_url_with_base,
};

/// Progress of a [`ForecastClient`] through its single run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Idle,
    UrlBuilt,
    Fetched,
    Parsed,
    Done,
    Failed(String),
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done | Stage::Failed(_))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Idle => f.write_str("idle"),
            Stage::UrlBuilt => f.write_str("url-built"),
            Stage::Fetched => f.write_str("fetched"),
            Stage::Parsed => f.write_str("parsed"),
            Stage::Done => f.write_str("done"),
            Stage::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Builds the request, fetches it once and extracts the result.
#[derive(Debug)]
pub struct ForecastClient {
    config: ClientConfig,
    transport: Option<Box<dyn Transport>>,
    stage: Stage,
    url: Option<String>,
    result: Option<ForecastResult>,
}

impl ForecastClient {
    /// Client backed by a real HTTP transport. If the HTTP client cannot be
    /// created the run fails at the fetch step.
    pub fn new(config: ClientConfig) -> Self {
        let transport = match HttpTransport::new() {
            Ok(http) => Some(Box::new(http) as Box<dyn Transport>),
            Err(err) => {
                log::error!("failed to create HTTP client: {err}");
                None
            }
        };
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: ClientConfig, transport: Option<Box<dyn Transport>>) -> Self {
        Self {
            config,
            transport,
            stage: Stage::Idle,
            url: None,
            result: None,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn result(&self) -> Option<&ForecastResult> {
        self.result.as_ref()
    }

    /// Run the whole pipeline for `coord`. A client runs at most once; the
    /// transport is released when the run ends, whatever the outcome.
    pub async fn run(&mut self, coord: &Coordinate) -> Result<ForecastResult> {
        if self.stage.is_terminal() {
            return Err(Error::Finished(self.stage.clone()));
        }

        let outcome = self.steps(coord).await;
        self.transport = None;

        match outcome {
            Ok(result) => {
                self.stage = Stage::Done;
                self.result = Some(result.clone());
                Ok(result)
            }
            Err(err) => {
                log::debug!("forecast run failed after stage {}", self.stage);
                self.stage = Stage::Failed(err.to_string());
                Err(err)
            }
        }
    }

    async fn steps(&mut self, coord: &Coordinate) -> Result<ForecastResult> {
        let url = build_request_url_with_base(&self.config.base_url, coord);
        self.url = Some(url.clone());
        self.stage = Stage::UrlBuilt;

        let body =
            fetch_forecast(self.transport.as_deref(), &url, self.config.user_agent()).await?;
        self.stage = Stage::Fetched;

        let result = extract_forecast(&body)?;
        self.stage = Stage::Parsed;

        Ok(result)
    }
}
