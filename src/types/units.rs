//! Unit conversions and time formatting shared by the reports.

use chrono::{DateTime, Local, TimeZone};

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Converts a temperature in Kelvin to degrees Celsius.
///
/// ```
/// use weather_report::kelvin_to_celsius;
///
/// assert!((kelvin_to_celsius(273.15)).abs() < 1e-9);
/// ```
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Renders a Kelvin temperature as Celsius with two decimals, e.g. `"14.85"`.
pub fn format_celsius(kelvin: f64) -> String {
    format!("{:.2}", kelvin_to_celsius(kelvin))
}

/// Renders a UNIX timestamp as `HH:MM:SS` on the wall clock of `tz`.
///
/// Returns `None` for timestamps outside chrono's representable range.
pub fn format_clock_time<Tz>(epoch_seconds: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_opt(epoch_seconds, 0)
        .earliest()
        .map(|dt| dt.format("%H:%M:%S").to_string())
}

/// Renders a UNIX timestamp as `HH:MM:SS` in the local time zone.
pub fn format_local_time(epoch_seconds: i64) -> Option<String> {
    format_clock_time(epoch_seconds, &Local)
}

/// Wall-clock part of `moment` as `HH:MM:SS`, used for log entry headers.
pub fn clock_time_of<Tz>(moment: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    moment.format("%H:%M:%S").to_string()
}
