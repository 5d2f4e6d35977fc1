use chrono::Utc;
use clap::Parser;
use env_logger::Env;
use kma_forecast::{
    load_config, service_time, CsvSheet, ForecastCollector, ForecastError, MemorySheet,
    DEFAULT_CONFIG_FILE,
};
use log::{error, LevelFilter};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Collect the latest LDAPS point forecast for one grid cell and append it to a sheet.
#[derive(Debug, Parser)]
#[command(name = "kma-forecast", version, about)]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the configured target date (YYYYMMDD).
    #[arg(long)]
    target_date: Option<String>,

    /// Print the rows instead of appending them to the sheet file.
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging for this crate.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if cli.verbose {
        logger.filter_module("kma_forecast", LevelFilter::Debug);
    }
    logger.init();

    match run(cli).await {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, ForecastError> {
    let mut raw = load_config(&cli.config)?;
    if let Some(target_date) = cli.target_date {
        raw.target_date = Some(target_date);
    }
    let config = raw.validate()?;
    let sheet_dir = config.output_dir.clone();
    let sheet_name = config.sheet_name.clone();
    let collector = ForecastCollector::from_config(config)?;
    let now = service_time(Utc::now());

    if cli.dry_run {
        let mut sheet = MemorySheet::new();
        let report = collector.run_cycle(now, &mut sheet).await?;
        for row in sheet.rows() {
            println!("{}", row.join("\t"));
        }
        return Ok(report.to_string());
    }

    let mut sheet = CsvSheet::new(&sheet_dir, &sheet_name);
    let report = collector.run_cycle(now, &mut sheet).await?;
    Ok(format!("{report} -> {}", sheet.path().display()))
}
