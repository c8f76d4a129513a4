mod entry_log;
mod mood_entry;
mod store;

pub use entry_log::EntryLog;
pub use mood_entry::MoodEntry;
pub use store::{EntryStore, LoadError, LoadOutcome};
