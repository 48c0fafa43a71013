//! Pieces shared by the three binaries: common flags, logger setup and error reporting.

use crate::client::Outcome;
use crate::config::Config;
use crate::error::WeatherReportError;
use clap::Args;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Path to a TOML config file [default: <config dir>/weather_report/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the log files are written to (overrides the config file)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl CommonArgs {
    /// Loads the config and applies the command-line overrides.
    ///
    /// # Errors
    ///
    /// Propagates config file read and parse failures.
    pub fn load_config(&self) -> Result<Config, WeatherReportError> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}

/// Installs the `env_logger` backend. `RUST_LOG` controls verbosity, default `warn`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Formats an error and its source chain for stderr, one cause per line.
pub fn describe_error(err: &WeatherReportError) -> String {
    let mut text = format!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    text
}

/// Prints the "saved" confirmation for each appended log and a diagnostic for each failed one.
///
/// Returns a failure exit code when any append failed.
pub fn report_saves<R>(outcome: &Outcome<R>) -> ExitCode {
    for path in &outcome.saved {
        println!("Data successfully saved in {}.", path.display());
    }
    for err in &outcome.failed {
        eprintln!("{}", describe_error(err));
    }
    if outcome.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
