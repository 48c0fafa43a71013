//! Runtime configuration: API keys, endpoint base URLs and the output directory for logs.
//!
//! Values come from a TOML file and can be overridden by environment variables.
//! A missing file simply yields the defaults.

pub mod error;

use crate::config::error::ConfigError;
use log::{debug, info};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "weather_report";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const OPENWEATHER_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const WEATHER_COM_KEY_ENV: &str = "WEATHER_COM_API_KEY";

pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "http://api.openweathermap.org";
pub const DEFAULT_WEATHER_COM_BASE_URL: &str = "https://api.weather.com";

/// The weather providers the utilities talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// OpenWeatherMap, used for current conditions and forecasts.
    OpenWeather,
    /// weather.com, used for historical observations.
    WeatherCom,
}

impl Provider {
    fn name(self) -> &'static str {
        match self {
            Provider::OpenWeather => "OpenWeatherMap",
            Provider::WeatherCom => "weather.com",
        }
    }

    fn env_var(self) -> &'static str {
        match self {
            Provider::OpenWeather => OPENWEATHER_KEY_ENV,
            Provider::WeatherCom => WEATHER_COM_KEY_ENV,
        }
    }

    fn config_key(self) -> &'static str {
        match self {
            Provider::OpenWeather => "openweather_api_key",
            Provider::WeatherCom => "weather_com_api_key",
        }
    }
}

/// Settings shared by all three utilities.
///
/// # Examples
///
/// ```
/// use weather_report::Config;
///
/// let config: Config = toml::from_str(r#"openweather_api_key = "abc""#).unwrap();
/// assert_eq!(config.openweather_base_url, "http://api.openweathermap.org");
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub openweather_api_key: Option<String>,
    pub weather_com_api_key: Option<String>,
    pub openweather_base_url: String,
    pub weather_com_base_url: String,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openweather_api_key: None,
            weather_com_api_key: None,
            openweather_base_url: DEFAULT_OPENWEATHER_BASE_URL.to_string(),
            weather_com_base_url: DEFAULT_WEATHER_COM_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, or from the default location when `path` is `None`,
    /// then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] when an existing file cannot be
    /// used. An explicitly given path that does not exist is a read error; a missing default
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                Ok(path) => {
                    debug!("No config file at {}, using defaults", path.display());
                    Self::default()
                }
                Err(e) => {
                    debug!("{}, using defaults", e);
                    Self::default()
                }
            },
        };
        config.apply_overrides(|name| env::var(name).ok());
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config = toml::from_str(&text)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), Box::new(e)))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replaces API keys with values returned by `lookup` for the key environment variables.
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(key) = non_empty(OPENWEATHER_KEY_ENV) {
            self.openweather_api_key = Some(key);
        }
        if let Some(key) = non_empty(WEATHER_COM_KEY_ENV) {
            self.weather_com_api_key = Some(key);
        }
    }

    /// Returns the API key for `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no key was configured.
    pub fn api_key(&self, provider: Provider) -> Result<&str, ConfigError> {
        let key = match provider {
            Provider::OpenWeather => self.openweather_api_key.as_deref(),
            Provider::WeatherCom => self.weather_com_api_key.as_deref(),
        };
        key.ok_or(ConfigError::MissingApiKey {
            provider: provider.name(),
            env_var: provider.env_var(),
            key: provider.config_key(),
        })
    }

    pub fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenWeather => &self.openweather_base_url,
            Provider::WeatherCom => &self.weather_com_base_url,
        }
    }
}

/// `<config dir>/weather_report/config.toml`, e.g. `~/.config/weather_report/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .ok_or(ConfigError::ConfigDirResolution)
        .map(|p| p.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
