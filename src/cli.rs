//! Command-line interface parsing for the Taiwan weather CLI
//!
//! This module handles parsing of CLI arguments using clap and resolves them
//! into the forecast request the app starts with.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::data::{get_city_by_name, ForecastRequest};

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// The city is not in the built-in table and no dataset was given
    #[error("Unknown city: '{0}'. Use a county or city name such as 臺北市, or pass --dataset")]
    UnknownCity(String),

    /// The authorization key is empty
    #[error("Missing API key. Pass --api-key or set CWA_API_KEY")]
    MissingApiKey,
}

/// Taiwan township weather - current conditions and a 47-hour temperature chart
#[derive(Parser, Debug)]
#[command(name = "twweather")]
#[command(about = "Taiwan township weather from the CWA open data API")]
#[command(version)]
pub struct Cli {
    /// County or city, e.g. 臺北市 (台北市 also works)
    #[arg(long)]
    pub city: String,

    /// Township within the city, e.g. 大安區
    #[arg(long)]
    pub region: String,

    /// Datastore id to query; defaults to the city's 3-day township forecast
    #[arg(long, value_name = "ID")]
    pub dataset: Option<String>,

    /// CWA open data authorization key
    #[arg(long, env = "CWA_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Fetch once and print the report as JSON instead of opening the TUI
    #[arg(long)]
    pub json: bool,

    /// Write logs to this file (the TUI discards them otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Request template used for every fetch
    pub request: ForecastRequest,
    /// Authorization key for the API
    pub api_key: String,
    /// Print JSON and exit instead of running the TUI
    pub json_output: bool,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the dataset resolved
    /// * `Err(CliError)` if the city is unknown and no dataset was given, or the key is blank
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let api_key = cli.api_key.trim();
        if api_key.is_empty() {
            return Err(CliError::MissingApiKey);
        }

        let (city, dataset_id) = match (&cli.dataset, get_city_by_name(&cli.city)) {
            (Some(dataset), Some(city)) => (city.name.to_string(), dataset.clone()),
            (Some(dataset), None) => (cli.city.trim().to_string(), dataset.clone()),
            (None, Some(city)) => (city.name.to_string(), city.three_day_dataset.to_string()),
            (None, None) => return Err(CliError::UnknownCity(cli.city.clone())),
        };

        Ok(StartupConfig {
            request: ForecastRequest::new(city, cli.region.trim(), dataset_id),
            api_key: api_key.to_string(),
            json_output: cli.json,
        })
    }
}
