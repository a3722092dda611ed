//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::schema::RouteTableConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::{RouteError, RouteTable};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config<T: DeserializeOwned>(content: &str) -> Result<RouteTableConfig<T>, ConfigError> {
    let config: RouteTableConfig<T> = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<RouteTableConfig<T>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::info!(path = ?path, routes = config.routes.len(), "Route config loaded");
    Ok(config)
}

/// Load a config file and build a table over `values`.
pub fn load_table<T>(
    path: &Path,
    values: impl IntoIterator<Item = T>,
) -> Result<RouteTable<T>, ConfigError>
where
    T: DeserializeOwned + PartialEq,
{
    let config = load_config(path)?;
    Ok(RouteTable::from_config(values, config)?)
}
