use std::fs;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::services::simulation_request::SimulationRequest;
use crate::services::simulation_types::SimulationResult;

#[derive(Error, Debug)]
pub enum SchedulerApiError {
    #[error("{0}")]
    Config(String),
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
    /// Error reported by the service, surfaced verbatim.
    #[error("{0}")]
    Service(String),
}

/// Where the scheduling service lives. Passed explicitly at client
/// construction; there is no ambient default inside the client.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerServiceConfig {
    pub base_url: String,
}

impl SchedulerServiceConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, SchedulerApiError> {
        let contents = fs::read_to_string(filepath)
            .map_err(|err| SchedulerApiError::Config(format!("failed to read config: {err}")))?;
        let config: SchedulerServiceConfig =
            serde_yaml::from_str(&contents).map_err(|_| SchedulerApiError::Parse)?;
        Ok(config)
    }
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    error: String,
    process: Option<usize>,
}

#[derive(Debug)]
pub struct SchedulerApiClient {
    config: SchedulerServiceConfig,
    client: Client,
}

impl SchedulerApiClient {
    pub fn new(config: SchedulerServiceConfig) -> Result<Self, SchedulerApiError> {
        if config.base_url.is_empty() {
            return Err(SchedulerApiError::Config(
                "service config is missing base_url".to_string(),
            ));
        }

        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Submits one simulation request and returns the service's result.
    pub async fn run_simulation(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SchedulerApiError> {
        let url = format!("{}/processes", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|_| SchedulerApiError::Connection)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .json::<ServiceErrorBody>()
                .await
                .map_err(|_| SchedulerApiError::Parse)?;
            let message = match body.process {
                Some(index) => format!("{} (process {index})", body.error),
                None => body.error,
            };
            return Err(SchedulerApiError::Service(message));
        }

        response
            .json::<SimulationResult>()
            .await
            .map_err(|_| SchedulerApiError::Parse)
    }
}
