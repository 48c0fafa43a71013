use crate::config::error::ConfigError;
use crate::fetch::error::FetchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherReportError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unable to open file '{0}' for writing")]
    LogWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read input")]
    Prompt(#[source] std::io::Error),

    #[error("Invalid date '{0}', expected YYYYMMDD")]
    InvalidDate(String),

    #[error("City must not be empty")]
    EmptyCity,
}
