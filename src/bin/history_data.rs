use chrono::NaiveDate;
use clap::Parser;
use std::process::ExitCode;
use weather_report::cli::{describe_error, init_logging, report_saves, CommonArgs};
use weather_report::{parse_city, parse_compact_date, Prompter, WeatherClient, WeatherReportError};

/// Print historical observations for a city and day, saving the raw response.
///
/// Missing --date or --city values are asked for on stdin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Day to look up, as YYYYMMDD
    #[arg(long, value_parser = parse_date_arg)]
    date: Option<NaiveDate>,

    /// City to look up
    #[arg(long, value_parser = parse_city_arg)]
    city: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_compact_date(s).map_err(|e| e.to_string())
}

fn parse_city_arg(s: &str) -> Result<String, String> {
    parse_city(s).map_err(|e| e.to_string())
}

fn run(cli: &Cli) -> Result<ExitCode, WeatherReportError> {
    let config = cli.common.load_config()?;

    let mut prompter = Prompter::stdio();
    let date = match cli.date {
        Some(date) => date,
        None => prompter.ask_date()?,
    };
    let city = match &cli.city {
        Some(city) => city.clone(),
        None => prompter.ask_city()?,
    };

    let client = WeatherClient::new(config);
    let outcome = client.history().city(&city).date(date).call()?;

    if !outcome.report.observations.is_empty() {
        println!("{}", outcome.report);
    }
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
