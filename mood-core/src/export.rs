//! CSV export of a statistics window.

use crate::journal::EntryLog;
use crate::stats::Period;
use chrono::NaiveDate;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

pub const CSV_HEADER: &str = "Tanggal,Mood,Cerita";

#[derive(Debug, Error)]
#[error("could not export to {}: {source}", .path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// `mood_weekly_20250815.csv`
pub fn export_file_name(period: Period, today: NaiveDate) -> String {
    format!("mood_{}_{}.csv", period.as_ref(), today.format("%Y%m%d"))
}

/// Quotes a field when it holds a comma, a quote or a line break. Embedded quotes are doubled.
pub fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Writes the header and one `date,mood,story` row per entry.
pub fn write_csv<W: Write>(log: &EntryLog, mut out: W) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for entry in log {
        let date = entry.date.format("%Y-%m-%d").to_string();
        writeln!(
            out,
            "{},{},{}",
            csv_field(&date),
            csv_field(&entry.mood),
            csv_field(&entry.story)
        )?;
    }
    out.flush()
}
