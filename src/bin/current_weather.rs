use clap::Parser;
use std::process::ExitCode;
use weather_report::cli::{describe_error, init_logging, report_saves, CommonArgs};
use weather_report::{WeatherClient, WeatherReportError};

/// Print the current weather for a city and append the raw API response to weather_report.txt.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// City to report on
    #[arg(long, default_value = "london")]
    city: String,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(cli: &Cli) -> Result<ExitCode, WeatherReportError> {
    let client = WeatherClient::new(cli.common.load_config()?);
    let outcome = client.current().city(&cli.city).call()?;

    println!("{}", outcome.report);
    Ok(report_saves(&outcome))
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", describe_error(&e));
            ExitCode::FAILURE
        }
    }
}
