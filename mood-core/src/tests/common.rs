use crate::{Config, moods::MoodTable, stats::WindowMode};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_file: PathBuf, reference_date: Option<NaiveDate>) -> Config {
    let export_dir = data_file
        .parent()
        .map(|p| p.join("exports"))
        .unwrap_or_else(|| PathBuf::from("."));
    Config {
        data_file,
        export_dir,
        editor: None,
        date_format: "%A, %d %b %Y".to_string(),
        window_mode: WindowMode::Entries,
        reference_date: reference_date.unwrap_or(Local::now().date_naive()),
        moods: MoodTable::default(),
    }
}
