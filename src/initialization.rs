use std::env;
use log::info;
use crate::config::{load_config, Config};
use crate::errors::RainfallInitError;
use crate::logging::setup_logger;

/// Default configuration file, used when CONFIG_FILE is not set
const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads configuration and sets up logging
///
pub fn init() -> Result<Config, RainfallInitError> {
    let config_file = env::var("CONFIG_FILE").unwrap_or(DEFAULT_CONFIG_FILE.to_string());

    let config = load_config(&config_file)?;
    setup_logger(&config.general)?;

    info!("rainfall version: {}", env!("CARGO_PKG_VERSION"));
    info!("using config file {} and model file {}", config_file, config.files.model_file);

    Ok(config)
}
