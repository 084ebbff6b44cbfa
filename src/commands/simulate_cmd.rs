use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_simulation_report;
use crate::services::process_input::parse_process_list;
use crate::services::scheduler_api::{
    SchedulerApiClient, SchedulerApiError, SchedulerServiceConfig,
};
use crate::services::simulation_request::SimulationRequest;

const DEFAULT_BASE_URL: &str = "http://localhost:8081";

pub async fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        input,
        alg,
        quantum,
        aging,
        config,
        base_url,
    } = cmd
    {
        let service_config = match resolve_config(config.as_deref(), base_url) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load service config: {e}");
                return;
            }
        };

        let contents = match tokio::fs::read_to_string(&input).await {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read process list: {e}");
                return;
            }
        };

        let processes = match parse_process_list(&contents) {
            Ok(processes) => processes,
            Err(e) => {
                eprintln!("Invalid process list: {e}");
                return;
            }
        };

        // Everything is validated before the client is even built; nothing
        // goes on the wire for a rejected submission.
        let request = match SimulationRequest::build(alg, quantum, aging, processes) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Invalid simulation request: {e}");
                return;
            }
        };

        let client = match SchedulerApiClient::new(service_config) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to create scheduler client: {e}");
                return;
            }
        };

        let result = match client.run_simulation(&request).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Simulation request failed: {e}");
                return;
            }
        };

        match format_simulation_report(&result) {
            Ok(report) => println!("{report}"),
            Err(e) => eprintln!("Failed to render simulation result: {e}"),
        }
    }
}

fn resolve_config(
    config_path: Option<&str>,
    base_url: Option<String>,
) -> Result<SchedulerServiceConfig, SchedulerApiError> {
    if let Some(base_url) = base_url {
        return Ok(SchedulerServiceConfig { base_url });
    }
    match config_path {
        Some(path) => SchedulerServiceConfig::from_yaml_file(path),
        None => Ok(SchedulerServiceConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn base_url_flag_wins_over_config_file() {
        let config_file = assert_fs::NamedTempFile::new("service.yaml").unwrap();
        config_file
            .write_str("base_url: http://config-host:8081\n")
            .unwrap();

        let config = resolve_config(
            config_file.path().to_str(),
            Some("http://flag-host:8081".to_string()),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://flag-host:8081");
    }

    #[test]
    fn falls_back_to_the_default_base_url() {
        let config = resolve_config(None, None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
