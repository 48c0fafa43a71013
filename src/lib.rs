//! Fetch current weather, forecasts and historical observations from public weather APIs,
//! print a readable summary and keep a flat-file log of what was received.
//!
//! The three binaries (`current_weather`, `weather_forecast`, `history_data`) are thin
//! wrappers around [`WeatherClient`].

pub mod cli;
mod client;
mod config;
mod endpoint;
mod error;
mod fetch;
mod log_file;
mod prompt;
mod types;

pub use client::{
    Outcome, WeatherClient, CURRENT_LOG_FILE, FORECAST_PROCESSED_LOG_FILE, FORECAST_RAW_LOG_FILE,
    HISTORY_LOG_FILE,
};
pub use config::error::ConfigError;
pub use config::{
    default_config_path, Config, Provider, DEFAULT_OPENWEATHER_BASE_URL,
    DEFAULT_WEATHER_COM_BASE_URL, OPENWEATHER_KEY_ENV, WEATHER_COM_KEY_ENV,
};
pub use endpoint::{current_weather_url, forecast_url, history_url};
pub use error::WeatherReportError;
pub use fetch::document::{extract, parse_document, parse_report};
pub use fetch::error::FetchError;
pub use fetch::transport::{HttpTransport, Payload, Transport};
pub use log_file::FlatFileLog;
pub use prompt::{parse_city, parse_compact_date, Prompter, CITY_PROMPT, DATE_PROMPT};

pub use types::current::*;
pub use types::forecast::*;
pub use types::history::*;
pub use types::units::{
    format_celsius, format_clock_time, format_local_time, kelvin_to_celsius, KELVIN_OFFSET,
};
