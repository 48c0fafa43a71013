use chrono::NaiveDate;
use clap::Parser;
use std::process::ExitCode;
use weather_report::cli::{describe_error, init_logging, report_saves, CommonArgs};
use weather_report::{WeatherClient, WeatherReportError};

/// Print a multi-day forecast for a city and log both the raw response and a digest.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// City to forecast
    #[arg(long, default_value = "London")]
    city: String,

    /// Date the forecast is requested for (YYYY-MM-DD)
    #[arg(long, default_value = "2024-01-13")]
    date: NaiveDate,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(cli: &Cli) -> Result<ExitCode, WeatherReportError> {
    let client = WeatherClient::new(cli.common.load_config()?);
    let outcome = client
        .forecast()
        .city(&cli.city)
        .date(cli.date)
        .call()?;

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
