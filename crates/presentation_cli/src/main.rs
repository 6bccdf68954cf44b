//! weather-stats CLI
//!
//! Reads a list of cities, fetches their current weather one at a time,
//! writes the report and prints a summary.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod summary;

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context;
use application::WeatherReportService;
use clap::Parser;
use infrastructure::{
    AppConfig, InputError, OutputFormat, WeatherAdapter, create_writer, read_city_names,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for a missing or unreadable input file
const EXIT_INPUT: u8 = 2;

/// Fetch current temperatures for a list of cities and aggregate them
#[derive(Debug, Parser)]
#[command(name = "weather-stats")]
#[command(version, long_about = None)]
struct Cli {
    /// Text file with one city name per line
    file: PathBuf,

    /// Output file (default: weather_data.csv or weather_data.json)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "csv|json")]
    format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, env = "WEATHER_STATS_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Map a fatal error to the process exit code
fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<InputError>().is_some() {
        EXIT_INPUT
    } else {
        1
    }
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cities = read_city_names(&cli.file)?;

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let format = cli.format.unwrap_or(config.output.format);
    let out = cli.out.unwrap_or_else(|| config.output.path_for(format));
    info!(cities = cities.len(), %format, out = %out.display(), "Starting weather report");

    let adapter = WeatherAdapter::with_config(config.weather)?;
    let service = WeatherReportService::new(Arc::new(adapter))
        .with_request_delay(config.pipeline.request_delay());

    let writer = create_writer(format, out);
    let report = service.generate(cities, writer.as_ref()).await?;

    print!("{}", summary::render(&report, writer.destination()));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        },
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "weather-stats failed");
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        },
    }
}
