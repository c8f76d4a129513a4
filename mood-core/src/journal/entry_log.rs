//! `EntryLog`, the ordered in-memory sequence of entries.

use super::mood_entry::MoodEntry;
use chrono::NaiveDate;

/// Entries in insertion order until [`EntryLog::sort_by_date`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryLog {
    entries: Vec<MoodEntry>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry` at the end. No field validation happens here.
    pub fn append(&mut self, entry: MoodEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoodEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<MoodEntry> {
        self.entries
    }

    /// Reorders by ascending date. Entries sharing a date keep their relative order.
    pub fn sort_by_date(&mut self) {
        self.entries.sort_by_key(|e| e.date);
    }

    /// Entries whose story contains `keyword`, ignoring case. An empty keyword matches everything.
    pub fn search_by_keyword(&self, keyword: &str) -> EntryLog {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.story.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// The last `n` entries, or all of them if there are fewer.
    pub fn last_n(&self, n: usize) -> EntryLog {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..].iter().cloned().collect()
    }

    /// Entries dated on or after `start`.
    pub fn since(&self, start: NaiveDate) -> EntryLog {
        self.entries
            .iter()
            .filter(|e| e.date >= start)
            .cloned()
            .collect()
    }

    /// The last entry in the current order.
    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }
}

impl From<Vec<MoodEntry>> for EntryLog {
    fn from(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<MoodEntry> for EntryLog {
    fn from_iter<I: IntoIterator<Item = MoodEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EntryLog {
    type Item = MoodEntry;
    type IntoIter = std::vec::IntoIter<MoodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryLog {
    type Item = &'a MoodEntry;
    type IntoIter = std::slice::Iter<'a, MoodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
