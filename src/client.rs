//! The fetch, parse, log sequence behind each utility.
//!
//! Every report runs the same straight line: build the URL, fetch the whole body,
//! parse it, deserialize the typed report and, only when all of that succeeded,
//! append to the flat-file logs. Any fetch, parse or shape failure aborts the run before
//! anything is written. A failed append does not: the report is still returned and the
//! append error is collected in [`Outcome::failed`].

use crate::config::{Config, Provider};
use crate::endpoint;
use crate::error::WeatherReportError;
use crate::fetch::document::parse_report;
use crate::fetch::transport::{HttpTransport, Transport};
use crate::log_file::FlatFileLog;
use crate::types::current::CurrentConditions;
use crate::types::forecast::Forecast;
use crate::types::history::History;
use bon::bon;
use chrono::NaiveDate;
use log::{info, warn};
use std::path::PathBuf;

pub const CURRENT_LOG_FILE: &str = "weather_report.txt";
pub const FORECAST_RAW_LOG_FILE: &str = "raw_weather_forecast.txt";
pub const FORECAST_PROCESSED_LOG_FILE: &str = "processed_weather_forecast.txt";
pub const HISTORY_LOG_FILE: &str = "history_raw_data.json";

/// A finished run: the typed report and what happened to each log append.
#[derive(Debug)]
pub struct Outcome<R> {
    pub report: R,
    /// Logs that were appended to, in order.
    pub saved: Vec<PathBuf>,
    /// Appends that failed, in order.
    pub failed: Vec<WeatherReportError>,
}

impl<R> Outcome<R> {
    fn new(report: R) -> Self {
        Self {
            report,
            saved: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Whether every log append succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, log: &FlatFileLog, data: &str) {
        match log.append(data) {
            Ok(()) => self.saved.push(log.path().to_path_buf()),
            Err(e) => {
                warn!("Could not append to {}: {}", log.path().display(), e);
                self.failed.push(e);
            }
        }
    }
}

/// Client for the three weather reports.
///
/// # Examples
///
/// ```no_run
/// use weather_report::{Config, WeatherClient, WeatherReportError};
///
/// # fn main() -> Result<(), WeatherReportError> {
/// let client = WeatherClient::new(Config::load(None)?);
/// let outcome = client.current().city("london").call()?;
/// println!("{}", outcome.report);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WeatherClient<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl WeatherClient<HttpTransport> {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

#[bon]
impl<T: Transport> WeatherClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn default_log(&self, file_name: &str) -> FlatFileLog {
        FlatFileLog::in_dir(&self.config.output_dir, file_name)
    }

    /// Fetches current conditions for `city` and appends the raw payload to the log.
    ///
    /// * `.city(&str)`: **Required.**
    /// * `.log_file(FlatFileLog)`: Optional. Defaults to `weather_report.txt` in the output directory.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherReportError::Config`] without an OpenWeatherMap key and
    /// [`WeatherReportError::Fetch`] for transport, parse and shape failures. Log write
    /// failures are reported through [`Outcome::failed`] instead.
    #[builder]
    pub fn current(
        &self,
        city: &str,
        log_file: Option<FlatFileLog>,
    ) -> Result<Outcome<CurrentConditions>, WeatherReportError> {
        let api_key = self.config.api_key(Provider::OpenWeather)?;
        let url = endpoint::current_weather_url(
            self.config.base_url(Provider::OpenWeather),
            city,
            api_key,
        )?;

        let payload = self.transport.get(url.as_str())?;
        let report: CurrentConditions = parse_report(&payload)?;
        info!("Parsed current conditions for {}", report.name);

        let log = log_file.unwrap_or_else(|| self.default_log(CURRENT_LOG_FILE));
        let mut outcome = Outcome::new(report);
        outcome.record(&log, &payload.text());
        Ok(outcome)
    }

    /// Fetches the forecast for `city`, appends the raw payload to one log and a one-line
    /// digest to another.
    ///
    /// * `.city(&str)`, `.date(NaiveDate)`: **Required.**
    /// * `.raw_log(FlatFileLog)`: Optional. Defaults to `raw_weather_forecast.txt`.
    /// * `.processed_log(FlatFileLog)`: Optional. Defaults to `processed_weather_forecast.txt`.
    ///
    /// # Errors
    ///
    /// See [`WeatherClient::current`].
    #[builder]
    pub fn forecast(
        &self,
        city: &str,
        date: NaiveDate,
        raw_log: Option<FlatFileLog>,
        processed_log: Option<FlatFileLog>,
    ) -> Result<Outcome<Forecast>, WeatherReportError> {
        let api_key = self.config.api_key(Provider::OpenWeather)?;
        let url = endpoint::forecast_url(
            self.config.base_url(Provider::OpenWeather),
            city,
            date,
            api_key,
        )?;

        let payload = self.transport.get(url.as_str())?;
        let report: Forecast = parse_report(&payload)?;
        info!(
            "Parsed forecast for {} with {} entries ({} skipped)",
            report.city,
            report.entries.len(),
            report.skipped
        );

        let raw_log = raw_log.unwrap_or_else(|| self.default_log(FORECAST_RAW_LOG_FILE));
        let processed_log =
            processed_log.unwrap_or_else(|| self.default_log(FORECAST_PROCESSED_LOG_FILE));
        let summary = report.summary(city, &date.format("%Y-%m-%d").to_string());

        // Each log is attempted even if the other one failed
        let mut outcome = Outcome::new(report);
        outcome.record(&raw_log, &payload.text());
        outcome.record(&processed_log, &summary);
        Ok(outcome)
    }

    /// Fetches historical observations for `city` on `date` and appends the raw payload.
    ///
    /// * `.city(&str)`, `.date(NaiveDate)`: **Required.**
    /// * `.log_file(FlatFileLog)`: Optional. Defaults to `history_raw_data.json`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherReportError::Config`] without a weather.com key; otherwise see
    /// [`WeatherClient::current`].
    #[builder]
    pub fn history(
        &self,
        city: &str,
        date: NaiveDate,
        log_file: Option<FlatFileLog>,
    ) -> Result<Outcome<History>, WeatherReportError> {
        let api_key = self.config.api_key(Provider::WeatherCom)?;
        let url = endpoint::history_url(
            self.config.base_url(Provider::WeatherCom),
            city,
            date,
            api_key,
        )?;

        let payload = self.transport.get(url.as_str())?;
        let report: History = parse_report(&payload)?;
        info!("Parsed {} historical observations", report.observations.len());

        let log = log_file.unwrap_or_else(|| self.default_log(HISTORY_LOG_FILE));
        let mut outcome = Outcome::new(report);
        outcome.record(&log, &payload.text());
        Ok(outcome)
    }
}
