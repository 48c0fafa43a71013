//! Current conditions as returned by the OpenWeatherMap `weather` endpoint.

use crate::types::{first_element, whole_seconds};
use crate::types::units::{format_celsius, format_clock_time};
use chrono::{Local, TimeZone};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{self, Display, Write};

/// A current-weather document.
///
/// Every field without a `serde(default)` is required; a document missing any of them
/// fails to deserialize as a whole.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CurrentConditions {
    /// City name as resolved by the provider.
    pub name: String,
    pub main: MainReadings,
    /// The first entry of the `weather` array.
    #[serde(rename = "weather", deserialize_with = "first_element")]
    pub condition: Condition,
    pub wind: Wind,
    pub clouds: Clouds,
    pub sys: SunTimes,
    /// Visibility in meters.
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub cod: Option<ResponseCode>,
    #[serde(default)]
    message: Option<Value>,
}

/// Temperatures (Kelvin), pressure (hPa) and relative humidity (%).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Wind {
    /// Meters per second.
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Clouds {
    /// Cloudiness in percent.
    pub all: f64,
}

/// Sunrise and sunset as UNIX timestamps.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SunTimes {
    #[serde(deserialize_with = "whole_seconds")]
    pub sunrise: i64,
    #[serde(deserialize_with = "whole_seconds")]
    pub sunset: i64,
}

/// The `cod` field. OpenWeatherMap sends it as a number on some endpoints and as a string on others.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseCode {
    Number(i64),
    Text(String),
}

impl Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Number(n) => write!(f, "{}", n),
            ResponseCode::Text(s) => f.write_str(s),
        }
    }
}

const NOT_AVAILABLE: &str = "(not available)";

impl CurrentConditions {
    /// The API response message, when the provider sent one as a string.
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }

    /// Renders the console report with sunrise and sunset shown on the wall clock of `tz`.
    pub fn render<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let clock = |ts: i64| format_clock_time(ts, tz).unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_report(&mut out, clock);
        out
    }

    fn write_report<W, C>(&self, out: &mut W, clock: C) -> fmt::Result
    where
        W: Write,
        C: Fn(i64) -> String,
    {
        writeln!(out, "Weather Report for {}:", self.name)?;
        writeln!(out, "Temperature: {}°C", format_celsius(self.main.temp))?;
        writeln!(out, "Feels Like: {}°C", format_celsius(self.main.feels_like))?;
        writeln!(out, "Temperature Min: {}°C", format_celsius(self.main.temp_min))?;
        writeln!(out, "Temperature Max: {}°C", format_celsius(self.main.temp_max))?;
        writeln!(out, "Pressure: {:.2}hPa", self.main.pressure)?;
        writeln!(out, "Humidity: {}%", self.main.humidity as i64)?;
        match self.visibility {
            Some(meters) => writeln!(out, "Visibility: {} meters", meters as i64)?,
            None => writeln!(out, "Visibility: {}", NOT_AVAILABLE)?,
        }
        writeln!(out, "Wind Speed: {:.2}m/s", self.wind.speed)?;
        writeln!(out, "Cloudiness: {}%", self.clouds.all as i64)?;
        writeln!(out, "Weather: {}", self.condition.description)?;
        writeln!(out, "Sunrise: {}", clock(self.sys.sunrise))?;
        writeln!(out, "Sunset: {}", clock(self.sys.sunset))?;
        match &self.cod {
            Some(code) => writeln!(out, "API Response Code: {}", code)?,
            None => writeln!(out, "API Response Code: {}", NOT_AVAILABLE)?,
        }
        writeln!(
            out,
            "API Response Message: {}",
            self.message().unwrap_or(NOT_AVAILABLE)
        )?;
        write!(out, "API response indicates success.")
    }
}

impl Display for CurrentConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::document::parse_report;
    use crate::fetch::error::FetchError;
    use crate::fetch::transport::Payload;
    use chrono::Utc;

    const LONDON: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "base": "stations",
        "main": {"temp": 281.43, "feels_like": 279.2, "temp_min": 280.15, "temp_max": 282.59,
                 "pressure": 1012, "humidity": 81},
        "visibility": 10000,
        "wind": {"speed": 4.12, "deg": 250},
        "clouds": {"all": 75},
        "dt": 1705140000,
        "sys": {"type": 2, "id": 2075535, "country": "GB", "sunrise": 1705133001, "sunset": 1705162800},
        "timezone": 0,
        "id": 2643743,
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn test_parse_london() {
        let report: CurrentConditions = parse_report(&Payload::from(LONDON)).unwrap();
        assert_eq!(report.name, "London");
        assert_eq!(report.condition.description, "broken clouds");
        assert_eq!(report.cod, Some(ResponseCode::Number(200)));
        assert_eq!(report.message(), None);
        assert_eq!(report.visibility, Some(10000.0));
    }

    #[test]
    fn test_render_report() {
        let report: CurrentConditions = parse_report(&Payload::from(LONDON)).unwrap();
        let text = report.render(&Utc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Weather Report for London:",
                "Temperature: 8.28°C",
                "Feels Like: 6.05°C",
                "Temperature Min: 7.00°C",
                "Temperature Max: 9.44°C",
                "Pressure: 1012.00hPa",
                "Humidity: 81%",
                "Visibility: 10000 meters",
                "Wind Speed: 4.12m/s",
                "Cloudiness: 75%",
                "Weather: broken clouds",
                "Sunrise: 08:03:21",
                "Sunset: 16:20:00",
                "API Response Code: 200",
                "API Response Message: (not available)",
                "API response indicates success.",
            ]
        );
    }

    #[test]
    fn test_fractional_sun_times_are_truncated() {
        let body = LONDON
            .replace("\"sunrise\": 1705133001", "\"sunrise\": 1705133001.0")
            .replace("\"sunset\": 1705162800", "\"sunset\": 1705162800.75");
        let report: CurrentConditions = parse_report(&Payload::from(body.as_str())).unwrap();
        assert_eq!(report.sys.sunrise, 1_705_133_001);
        assert_eq!(report.sys.sunset, 1_705_162_800);

        let text = report.render(&Utc);
        assert!(text.contains("Sunrise: 08:03:21\n"));
        assert!(text.contains("Sunset: 16:20:00\n"));
    }

    #[test]
    fn test_string_sun_time_is_invalid_data() {
        let body = LONDON.replace("\"sunrise\": 1705133001", "\"sunrise\": \"dawn\"");
        let err = parse_report::<CurrentConditions>(&Payload::from(body.as_str())).unwrap_err();
        assert!(matches!(err, FetchError::InvalidData { .. }));
    }

    #[test]
    fn test_missing_main_is_invalid_data() {
        let body = LONDON.replace("\"main\":", "\"not_main\":");
        let err = parse_report::<CurrentConditions>(&Payload::from(body.as_str())).unwrap_err();
        assert!(matches!(err, FetchError::InvalidData { .. }));
    }

    #[test]
    fn test_empty_weather_array_is_invalid_data() {
        let body = r#"{"name": "X", "main": {"temp": 1, "feels_like": 1, "temp_min": 1, "temp_max": 1,
            "pressure": 1, "humidity": 1}, "weather": [], "wind": {"speed": 1}, "clouds": {"all": 1},
            "sys": {"sunrise": 0, "sunset": 0}}"#;
        let err = parse_report::<CurrentConditions>(&Payload::from(body)).unwrap_err();
        assert!(matches!(err, FetchError::InvalidData { .. }));
    }

    #[test]
    fn test_string_code_and_message() {
        let body = LONDON.replace("\"cod\": 200", "\"cod\": \"200\", \"message\": \"ok\"");
        let report: CurrentConditions = parse_report(&Payload::from(body.as_str())).unwrap();
        assert_eq!(report.cod, Some(ResponseCode::Text("200".to_string())));
        assert_eq!(report.message(), Some("ok"));
        assert!(report.render(&Utc).contains("API Response Message: ok"));
    }

    #[test]
    fn test_numeric_message_is_not_shown() {
        let body = LONDON.replace("\"cod\": 200", "\"cod\": 200, \"message\": 0");
        let report: CurrentConditions = parse_report(&Payload::from(body.as_str())).unwrap();
        assert_eq!(report.message(), None);
    }
}
