//! Multi-day forecasts as returned by the OpenWeatherMap `forecast` endpoint.

use crate::types::first_element;
use crate::types::units::{format_celsius, kelvin_to_celsius};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{self, Display};

/// A forecast document.
///
/// `city.name` and the `list` array are required. Individual entries that lack a
/// timestamp, readings or a weather description are skipped rather than failing the
/// whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawForecast")]
pub struct Forecast {
    pub city: String,
    pub entries: Vec<ForecastEntry>,
    /// Number of list entries that did not have the expected shape.
    pub skipped: usize,
}

#[derive(Deserialize)]
struct RawForecast {
    city: City,
    list: Vec<Value>,
}

#[derive(Deserialize)]
struct City {
    name: String,
}

/// One three-hour slot of the forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastEntry {
    /// Provider-formatted time of the slot, e.g. `2024-01-13 12:00:00`.
    pub dt_txt: String,
    pub main: EntryReadings,
    #[serde(rename = "weather", deserialize_with = "first_element")]
    pub condition: EntryCondition,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryReadings {
    /// Kelvin.
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryCondition {
    pub description: String,
}

impl From<RawForecast> for Forecast {
    fn from(raw: RawForecast) -> Self {
        let total = raw.list.len();
        let entries: Vec<ForecastEntry> = raw
            .list
            .into_iter()
            .enumerate()
            .filter_map(|(idx, item)| match serde_json::from_value(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping forecast entry {}: {}", idx, e);
                    None
                }
            })
            .collect();
        let skipped = total - entries.len();
        Forecast {
            city: raw.city.name,
            entries,
            skipped,
        }
    }
}

const SEPARATOR: &str = "----------------------------";

impl Forecast {
    /// Lowest and highest forecast temperature in Kelvin, if there are any entries.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        self.entries.iter().map(|e| e.main.temp).fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
    }

    /// One-line digest written to the processed forecast log.
    ///
    /// `requested_city` and `date` are the values the request was made with, which may differ
    /// in spelling from the city name the provider resolved.
    pub fn summary(&self, requested_city: &str, date: &str) -> String {
        let head = format!(
            "Processed data for {} on {}: {} entries",
            requested_city,
            date,
            self.entries.len()
        );
        match self.temperature_range() {
            Some((lo, hi)) => format!(
                "{}, min {:.2}°C, max {:.2}°C",
                head,
                kelvin_to_celsius(lo),
                kelvin_to_celsius(hi)
            ),
            None => head,
        }
    }
}

impl Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " --------------- Weather Forecast Report for {} ---------------:",
            self.city
        )?;
        for entry in &self.entries {
            writeln!(f)?;
            writeln!(
                f,
                "Date/Time: {}, Temperature: {}°C",
                entry.dt_txt,
                format_celsius(entry.main.temp)
            )?;
            writeln!(f, "Weather: {}", entry.condition.description)?;
            writeln!(f, "Humidity: {:.2}%", entry.main.humidity)?;
            write!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}
