pub mod current;
pub mod forecast;
pub mod history;
pub mod units;

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Number;

/// Deserializes a JSON array and keeps only its first element.
///
/// Used for the provider's `weather` arrays, where only the leading entry is reported.
/// An empty array is an error.
pub(crate) fn first_element<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Vec::<T>::deserialize(deserializer)?
        .into_iter()
        .next()
        .ok_or_else(|| de::Error::invalid_length(0, &"at least one element"))
}

/// Deserializes any JSON number as whole seconds, truncating a fractional part.
///
/// Providers send UNIX timestamps as integers, but `1705133001.0` is accepted too.
pub(crate) fn whole_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(seconds) = number.as_i64() {
        return Ok(seconds);
    }
    match number.as_f64() {
        Some(seconds) if seconds.is_finite() && seconds.abs() < i64::MAX as f64 => {
            Ok(seconds.trunc() as i64)
        }
        _ => Err(de::Error::custom(format!(
            "timestamp {} is out of range",
            number
        ))),
    }
}
