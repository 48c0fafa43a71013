//! Historical observations as returned by the weather.com `conditions/historical` endpoint.

use serde::Deserialize;
use serde_json::Value;
use std::fmt::{self, Display};

/// A historical-conditions document. Only the `observations` array is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct History {
    pub observations: Vec<Observation>,
}

/// One observation. Fields are shown verbatim, so each may be a string, a number or absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Observation {
    pub timestamp: Reading,
    pub temperature: Reading,
    pub humidity: Reading,
    pub sunrise: Reading,
    pub sunset: Reading,
}

/// A loosely typed observation field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Reading(pub Value);

impl Reading {
    pub fn is_present(&self) -> bool {
        !self.0.is_null()
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => f.write_str("(null)"),
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Timestamp: {}, Temperature: {}, Humidity: {}, Sunrise: {}, Sunset: {}",
            self.timestamp, self.temperature, self.humidity, self.sunrise, self.sunset
        )
    }
}

impl Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for observation in &self.observations {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}", observation)?;
        }
        Ok(())
    }
}
