use crate::{csv, AddressRecord, Result};
use pof_core::{
    gateways::geocode::GeoCodingGateway,
    progress::ProgressSink,
    rate_limit::Clock,
    report::Report,
    usecases::ResolutionPipeline,
};
use pof_gateways::{log_file, map};
use std::path::{Path, PathBuf};

/// Where to put the rendered results. `None` skips the output.
#[derive(Debug, Clone, Default)]
pub struct OutputFiles {
    pub map: Option<PathBuf>,
    pub log: Option<PathBuf>,
}

/// Resolves the records and aggregates the outcomes.
pub fn process_records<G, C, P>(
    pipeline: &mut ResolutionPipeline<G, C>,
    records: Vec<AddressRecord>,
    progress: &mut P,
) -> Result<Report>
where
    G: GeoCodingGateway,
    C: Clock,
    P: ProgressSink + ?Sized,
{
    let outcomes = pipeline.run(records, progress)?;
    let report = Report::aggregate(&outcomes);
    log::info!("Finished processing: {}", report.stats);
    Ok(report)
}

/// Loads the records from a CSV file, resolves them and writes
/// the map and the processing log.
pub fn process_csv_file<G, C, P>(
    pipeline: &mut ResolutionPipeline<G, C>,
    csv_file: &Path,
    delimiter: u8,
    outputs: &OutputFiles,
    progress: &mut P,
) -> Result<Report>
where
    G: GeoCodingGateway,
    C: Clock,
    P: ProgressSink + ?Sized,
{
    let records = csv::load_records_from_path(csv_file, delimiter)?;
    let report = process_records(pipeline, records, progress)?;
    write_outputs(&report, outputs)?;
    Ok(report)
}

pub fn write_outputs(report: &Report, outputs: &OutputFiles) -> Result<()> {
    if let Some(path) = &outputs.map {
        map::write_map(path, &report.resolved)?;
    }
    if let Some(path) = &outputs.log {
        log_file::write_log_file(path, &report.log, &report.stats)?;
    }
    Ok(())
}
