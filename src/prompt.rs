//! Interactive prompts for the history utility.

use crate::error::WeatherReportError;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub const DATE_PROMPT: &str = "Enter the date in YYYYMMDD format: ";
pub const CITY_PROMPT: &str = "Enter the city: ";

/// Parses a date written as `YYYYMMDD`.
///
/// ```
/// use weather_report::parse_compact_date;
///
/// let date = parse_compact_date("20240113").unwrap();
/// assert_eq!(date.to_string(), "2024-01-13");
/// assert!(parse_compact_date("2024-01-13").is_err());
/// ```
pub fn parse_compact_date(input: &str) -> Result<NaiveDate, WeatherReportError> {
    let input = input.trim();
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WeatherReportError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(input, "%Y%m%d")
        .map_err(|_| WeatherReportError::InvalidDate(input.to_string()))
}

/// Validates a city name, trimming surrounding whitespace.
pub fn parse_city(input: &str) -> Result<String, WeatherReportError> {
    let city = input.trim();
    if city.is_empty() {
        return Err(WeatherReportError::EmptyCity);
    }
    Ok(city.to_string())
}

/// Asks questions on `output` and reads answers from `input`, one line per answer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the next non-blank line, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherReportError::Prompt`] on I/O failure or when input ends first.
    pub fn ask(&mut self, question: &str) -> Result<String, WeatherReportError> {
        write!(self.output, "{}", question).map_err(WeatherReportError::Prompt)?;
        self.output.flush().map_err(WeatherReportError::Prompt)?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(WeatherReportError::Prompt)?;
            if read == 0 {
                return Err(WeatherReportError::Prompt(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before an answer was given",
                )));
            }
            if !line.trim().is_empty() {
                return Ok(line.trim().to_string());
            }
        }
    }

    pub fn ask_date(&mut self) -> Result<NaiveDate, WeatherReportError> {
        let answer = self.ask(DATE_PROMPT)?;
        // Only the first word counts, matching a whitespace-delimited read
        let token = answer.split_whitespace().next().unwrap_or_default();
        parse_compact_date(token)
    }

    pub fn ask_city(&mut self) -> Result<String, WeatherReportError> {
        let answer = self.ask(CITY_PROMPT)?;
        parse_city(&answer)
    }
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// A prompter on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_compact_date() {
        assert_eq!(
            parse_compact_date("20240229").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(
            parse_compact_date("20230229"),
            Err(WeatherReportError::InvalidDate(_))
        ));
        assert!(parse_compact_date("2024011").is_err());
        assert!(parse_compact_date("+2024011").is_err());
        assert!(parse_compact_date("").is_err());
    }

    #[test]
    fn test_prompts_for_date_and_city() {
        let input = Cursor::new("20240113\n\nNew York\n");
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);

        let date = prompter.ask_date().unwrap();
        let city = prompter.ask_city().unwrap();
        drop(prompter);

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());
        assert_eq!(city, "New York");
        assert_eq!(String::from_utf8(output).unwrap(), format!("{}{}", DATE_PROMPT, CITY_PROMPT));
    }

    #[test]
    fn test_date_uses_first_word() {
        let mut prompter = Prompter::new(Cursor::new("20240113 extra\n"), Vec::new());
        assert_eq!(
            prompter.ask_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()
        );
    }

    #[test]
    fn test_eof_is_prompt_error() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err = prompter.ask_city().unwrap_err();
        assert!(matches!(err, WeatherReportError::Prompt(_)));
    }

    #[test]
    fn test_blank_city_rejected() {
        assert!(matches!(parse_city("   "), Err(WeatherReportError::EmptyCity)));
    }
}
