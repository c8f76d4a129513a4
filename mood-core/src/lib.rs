pub mod capture;
pub mod config;
pub mod export;
pub mod journal;
pub mod moods;
pub mod stats;
mod tracker;

#[cfg(test)]
mod tests;

pub use capture::{CaptureError, NewEntry};
pub use config::Config;
pub use export::ExportError;
pub use journal::{EntryLog, EntryStore, LoadError, LoadOutcome, MoodEntry};
pub use moods::{Mood, MoodTable};
pub use stats::{MoodCount, MoodStats, Period, WindowMode};
pub use tracker::{History, MoodTracker, QueryResult};
