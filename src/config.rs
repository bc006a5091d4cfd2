use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::models::weather_reading::WeatherReading;

/// Cosmetic page style
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Pro,
    Classic,
}

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Deserialize, Debug)]
pub struct Files {
    pub model_file: String,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub general: General,
    pub files: Files,
    #[serde(default)]
    pub initial: WeatherReading,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and validates configuration items
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.files.model_file.trim().is_empty() {
        return Err(ConfigError::from("files.model_file is empty"));
    }
    config.initial.validate()?;

    Ok(config)
}
