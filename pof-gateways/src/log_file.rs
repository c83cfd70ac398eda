use pof_core::report::{LogLine, Stats};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

const DATE_TIME_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Writes the processing log: a timestamp header, one line per
/// record in input order and the summary statistics.
pub fn write_log<W: Write>(mut out: W, lines: &[LogLine], stats: &Stats) -> io::Result<()> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let timestamp = now
        .format(DATE_TIME_FORMAT)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    writeln!(out, "# Processing log {timestamp}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "# {stats}")?;
    out.flush()
}

pub fn write_log_file<P: AsRef<Path>>(path: P, lines: &[LogLine], stats: &Stats) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    write_log(BufWriter::new(file), lines, stats)?;
    log::info!("Wrote processing log to {}", path.as_ref().display());
    Ok(())
}
