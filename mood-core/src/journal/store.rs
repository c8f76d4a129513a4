//! Reading and rewriting the JSON data document.

use super::entry_log::EntryLog;
use super::mood_entry::MoodEntry;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an existing data document could not be turned into entries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a valid entry list: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Malformed { path, .. } => path,
        }
    }
}

/// The result of reading the data document.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No document yet. Expected on first use.
    Missing,
    Loaded(EntryLog),
    /// A document exists but is unusable.
    Unreadable(LoadError),
}

impl LoadOutcome {
    /// Collapses every outcome into a log, empty unless the document loaded.
    pub fn into_log(self) -> EntryLog {
        match self {
            LoadOutcome::Loaded(log) => log,
            LoadOutcome::Missing => EntryLog::new(),
            LoadOutcome::Unreadable(error) => {
                tracing::warn!(%error, "starting from an empty log");
                EntryLog::new()
            }
        }
    }
}

/// The data document on disk. Every call re-reads or fully rewrites it.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> LoadOutcome {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet");
                return LoadOutcome::Missing;
            }
            Err(source) => {
                return LoadOutcome::Unreadable(LoadError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str::<Vec<MoodEntry>>(&content) {
            Ok(entries) => {
                tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
                LoadOutcome::Loaded(EntryLog::from(entries))
            }
            Err(source) => LoadOutcome::Unreadable(LoadError::Malformed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replaces the whole document with `log`, in its current order.
    pub fn save(&self, log: &EntryLog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating parent directory {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(log.entries())
            .with_context(|| format!("serializing entries for {}", self.path.display()))?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = log.len(), "saved entries");
        Ok(())
    }
}
