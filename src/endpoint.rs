//! Request URL templates for the three reports.
//!
//! Values are substituted as query parameters, so city names with spaces or
//! non-ASCII characters are percent-encoded.

use crate::config::error::ConfigError;
use chrono::NaiveDate;
use reqwest::Url;

const CURRENT_WEATHER_PATH: &str = "data/2.5/weather";
const FORECAST_PATH: &str = "data/2.5/forecast";
const HISTORY_PATH: &str = "v3/wx/conditions/historical";

fn build(base_url: &str, path: &str, params: &[(&str, &str)]) -> Result<Url, ConfigError> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), path);
    Url::parse_with_params(&raw, params).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

/// `<base>/data/2.5/weather?q=<city>&appid=<key>`
pub fn current_weather_url(base_url: &str, city: &str, api_key: &str) -> Result<Url, ConfigError> {
    build(
        base_url,
        CURRENT_WEATHER_PATH,
        &[("q", city), ("appid", api_key)],
    )
}

/// `<base>/data/2.5/forecast?q=<city>&dt=<YYYY-MM-DD>&appid=<key>`
pub fn forecast_url(
    base_url: &str,
    city: &str,
    date: NaiveDate,
    api_key: &str,
) -> Result<Url, ConfigError> {
    let date = date.format("%Y-%m-%d").to_string();
    build(
        base_url,
        FORECAST_PATH,
        &[("q", city), ("dt", &date), ("appid", api_key)],
    )
}

/// `<base>/v3/wx/conditions/historical?apiKey=<key>&language=en-US&format=json&date=<YYYYMMDD>&city=<city>`
pub fn history_url(
    base_url: &str,
    city: &str,
    date: NaiveDate,
    api_key: &str,
) -> Result<Url, ConfigError> {
    let date = date.format("%Y%m%d").to_string();
    build(
        base_url,
        HISTORY_PATH,
        &[
            ("apiKey", api_key),
            ("language", "en-US"),
            ("format", "json"),
            ("date", &date),
            ("city", city),
        ],
    )
}
