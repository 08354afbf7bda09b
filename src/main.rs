use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use weather_stats::WeatherData;

/// Summarize a daily weather file: smallest spread, highest average,
/// highest max and lowest min temperature.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// whitespace-delimited file of `<day> <max temp> <min temp>` lines
    #[arg(default_value = "weather.dat")]
    file: PathBuf,
    /// exit with a failure code when no valid row is found
    #[arg(long)]
    strict: bool,
}

fn main() -> miette::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{args:?}");

    let data = WeatherData::load(&args.file)?;

    match data.summary() {
        Ok(summary) => {
            print!("{summary}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("Error: {e}");
            if args.strict {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
