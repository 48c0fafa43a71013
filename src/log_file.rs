//! Append-only flat-file log.
//!
//! Every entry is a timestamp header followed by the logged text and a blank line:
//!
//! ```text
//! Data stored at 14:02:51:
//! {"name":"London", ...}
//!
//! ```

use crate::error::WeatherReportError;
use crate::types::units::clock_time_of;
use chrono::{DateTime, Local, TimeZone};
use log::info;
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFileLog {
    path: PathBuf,
}

impl FlatFileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A log named `file_name` inside `dir`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `data` under a header stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherReportError::LogWrite`] if the file cannot be opened or written, and
    /// [`WeatherReportError::OutputDirCreation`] if its parent directory cannot be created.
    pub fn append(&self, data: &str) -> Result<(), WeatherReportError> {
        self.append_at(&Local::now(), data)
    }

    /// Appends `data` under a header stamped with `moment`.
    ///
    /// # Errors
    ///
    /// See [`FlatFileLog::append`].
    pub fn append_at<Tz>(&self, moment: &DateTime<Tz>, data: &str) -> Result<(), WeatherReportError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| WeatherReportError::OutputDirCreation(parent.to_path_buf(), e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| WeatherReportError::LogWrite(self.path.clone(), e))?;

        // Header and data go out in a single write
        let entry = format!("Data stored at {}:\n{}\n\n", clock_time_of(moment), data);
        file.write_all(entry.as_bytes())
            .map_err(|e| WeatherReportError::LogWrite(self.path.clone(), e))?;

        info!("Appended {} bytes to {}", entry.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_append_writes_header_and_payload() {
        let dir = tempfile::tempdir().unwrap();
        let log = FlatFileLog::in_dir(dir.path(), "weather_report.txt");
        let moment = Utc.with_ymd_and_hms(2024, 1, 13, 9, 15, 0).unwrap();

        log.append_at(&moment, r#"{"name":"London"}"#).unwrap();

        let text = fs::read_to_string(log.path()).unwrap();
        assert_eq!(text, "Data stored at 09:15:00:\n{\"name\":\"London\"}\n\n");
    }

    #[test]
    fn test_append_keeps_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let log = FlatFileLog::in_dir(dir.path(), "log.txt");
        let moment = Utc.with_ymd_and_hms(2024, 1, 13, 9, 15, 0).unwrap();

        log.append_at(&moment, "first").unwrap();
        log.append_at(&moment, "second").unwrap();

        let text = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            text,
            "Data stored at 09:15:00:\nfirst\n\nData stored at 09:15:00:\nsecond\n\n"
        );
    }

    #[test]
    fn test_append_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log = FlatFileLog::in_dir(&dir.path().join("nested/out"), "log.txt");
        log.append("entry").unwrap();
        assert!(log.path().exists());
    }

    #[test]
    fn test_append_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let log = FlatFileLog::new(dir.path());
        let err = log.append("entry").unwrap_err();
        assert!(matches!(err, WeatherReportError::LogWrite(..)));
    }
}
