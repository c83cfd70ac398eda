use crate::{config::Config, gateways, print, progress::ProgressBarSink};
use anyhow::{Context, Result};
use clap::Parser;
use pof_application::prelude::*;
use pof_core::{
    progress::{NoProgress, ProgressSink},
    rate_limit::RateLimiter,
    usecases::ResolutionPipeline,
};
use std::path::PathBuf;

/// Locate business addresses from a CSV file and put them on a map.
#[derive(Debug, Parser)]
#[command(name = "paraondefoi", version, author, about)]
pub struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file for the HTML map
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Output file for the processing log
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Do not show a progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// CSV file with the columns 'endereco', 'numero' and 'cep'
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;

    let geocoder = gateways::geocoding_gateway(&cfg.geocoding)?;
    let rate_limiter = RateLimiter::new(cfg.geocoding.min_interval);
    let mut pipeline = ResolutionPipeline::with_rate_limiter(geocoder, rate_limiter);

    let outputs = OutputFiles {
        map: Some(args.map.unwrap_or(cfg.output.map_file)),
        log: Some(args.log.unwrap_or(cfg.output.log_file)),
    };

    println!("PARA ONDE FOI?");
    let mut progress: Box<dyn ProgressSink> = if args.no_progress {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressBarSink::new())
    };
    let report = process_csv_file(
        &mut pipeline,
        &args.csv_file,
        cfg.input.delimiter,
        &outputs,
        progress.as_mut(),
    )
    .with_context(|| format!("Could not process '{}'", args.csv_file.display()))?;
    drop(progress);

    print::print_log(&report.log);
    print::print_stats(&report.stats);
    if let Some(map) = &outputs.map {
        println!();
        println!("Map: {}", map.display());
    }
    Ok(())
}
