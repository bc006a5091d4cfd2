use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;
use crate::models::weather_reading::Field;

/// Error depicting errors that occur while loading the configuration
///
#[derive(Error, Debug)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<StateError> for ConfigError {
    fn from(e: StateError) -> Self { ConfigError(format!("initial state: {}", e)) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Error, Debug)]
#[error("LoggingError: {0}")]
pub struct LoggingError(pub String);
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self { LoggingError(e.to_string()) }
}
impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self { LoggingError(e.to_string()) }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self { LoggingError(e.to_string()) }
}

/// Errors from assigning a value to a weather reading field
///
#[derive(Error, Debug, PartialEq)]
pub enum StateError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("'{1}' is not a number for {0}")]
    NotANumber(Field, String),
    #[error("{0} must be a whole number, got {1}")]
    NotAnInteger(Field, f64),
    #[error("{0} must be within {1}..={2}, got {3}")]
    OutOfBounds(Field, f64, f64, f64),
}

#[derive(Error, Debug, PartialEq)]
pub enum PresetError {
    #[error("unknown preset '{0}', try 'rainy day' or 'dry day'")]
    Unknown(String),
}

/// Error depicting errors in the interactive session, these are fatal to the process
///
#[derive(Error, Debug)]
#[error("SessionError: {0}")]
pub struct SessionError(pub String);
impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self { SessionError(e.to_string()) }
}

pub struct RainfallInitError(pub String);

impl fmt::Display for RainfallInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "RainfallInitError: {}", self.0)
    }
}
impl fmt::Debug for RainfallInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
impl std::error::Error for RainfallInitError {}
impl From<ConfigError> for RainfallInitError {
    fn from(e: ConfigError) -> Self {
        RainfallInitError(e.to_string())
    }
}
impl From<LoggingError> for RainfallInitError {
    fn from(e: LoggingError) -> Self {
        RainfallInitError(e.to_string())
    }
}
