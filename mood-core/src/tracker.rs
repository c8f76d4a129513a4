use crate::{
    Config,
    capture::NewEntry,
    export::{ExportError, export_file_name, write_csv},
    journal::{EntryLog, EntryStore, LoadError, LoadOutcome, MoodEntry},
    stats::{MoodStats, Period, select_window, summarize},
};
use anyhow::Result;
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Entries read for a query, together with any problem met while reading them.
///
/// A failed read never aborts a query: the log is simply empty and the
/// reason is listed in `errors`.
#[derive(Debug)]
pub struct QueryResult {
    pub log: EntryLog,
    pub errors: Vec<LoadError>,
}

/// A statistics view over one period.
#[derive(Debug)]
pub struct History {
    pub period: Period,
    pub window: EntryLog,
    pub stats: MoodStats,
    pub errors: Vec<LoadError>,
}

pub struct MoodTracker {
    pub config: Config,
    pub store: EntryStore,
}

impl MoodTracker {
    /// Creates a new `MoodTracker` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates a new `MoodTracker` instance with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        let store = EntryStore::new(&config.data_file);
        Self { config, store }
    }

    /// Validates `input`, appends it to the stored log and rewrites the document.
    ///
    /// Nothing is written when validation fails, or when the document exists
    /// but cannot be read (rewriting it would drop the unreadable entries).
    pub fn add_entry(&self, input: NewEntry<'_>) -> Result<MoodEntry> {
        let entry = input.validate(&self.config.moods, self.config.reference_date)?;
        let mut log = match self.store.load() {
            LoadOutcome::Loaded(log) => log,
            LoadOutcome::Missing => EntryLog::new(),
            LoadOutcome::Unreadable(error) => {
                return Err(anyhow::Error::new(error)
                    .context("refusing to overwrite a data file that could not be read"));
            }
        };
        log.append(entry.clone());
        self.store.save(&log)?;
        tracing::info!(date = %entry.date, mood = %entry.mood, "entry saved");
        Ok(entry)
    }

    /// Every stored entry, sorted by date.
    pub fn read_entries(&self) -> QueryResult {
        let mut errors = Vec::new();
        let mut log = match self.store.load() {
            LoadOutcome::Loaded(log) => log,
            LoadOutcome::Missing => EntryLog::new(),
            LoadOutcome::Unreadable(error) => {
                tracing::warn!(%error, "reading entries");
                errors.push(error);
                EntryLog::new()
            }
        };
        log.sort_by_date();
        QueryResult { log, errors }
    }

    /// Statistics for the last week or month of entries.
    pub fn history(&self, period: Period) -> History {
        let QueryResult { log, errors } = self.read_entries();
        let window = select_window(
            &log,
            period,
            self.config.window_mode,
            self.config.reference_date,
        );
        let stats = summarize(&window, &self.config.moods);
        History {
            period,
            window,
            stats,
            errors,
        }
    }

    /// Entries whose story contains `keyword`, case-insensitive, in date order.
    pub fn search(&self, keyword: &str) -> QueryResult {
        let QueryResult { log, errors } = self.read_entries();
        QueryResult {
            log: log.search_by_keyword(keyword),
            errors,
        }
    }

    /// Writes the window of `period` as CSV into `dir` and returns the file path.
    pub fn export(&self, period: Period, dir: &Path) -> Result<PathBuf, ExportError> {
        let window = self.history(period).window;
        let path = dir.join(export_file_name(period, self.config.reference_date));
        let to_error = |source: std::io::Error| ExportError {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(to_error)?;
        let file = File::create(&path).map_err(to_error)?;
        write_csv(&window, BufWriter::new(file)).map_err(to_error)?;
        tracing::info!(path = %path.display(), rows = window.len(), "exported window");
        Ok(path)
    }
}
