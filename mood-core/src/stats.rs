//! Weekly/monthly windows and the mood statistics computed over them.
//!
//! Everything here is a pure function over a snapshot of the log.

use crate::journal::{EntryLog, MoodEntry};
use crate::moods::MoodTable;
use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Period {
    Weekly,
    Monthly,
}

impl Period {
    /// Number of entries (or days, see [`WindowMode`]) the window covers.
    pub fn span(self) -> usize {
        match self {
            Period::Weekly => 7,
            Period::Monthly => 30,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }
}

/// How a period is cut out of the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// The last `span` entries in date order.
    #[default]
    Entries,
    /// Entries dated within `span` days of the reference date.
    Days,
}

/// Sorts a copy of `log` by date and keeps the part that belongs to `period`.
pub fn select_window(
    log: &EntryLog,
    period: Period,
    mode: WindowMode,
    reference_date: NaiveDate,
) -> EntryLog {
    let mut sorted = log.clone();
    sorted.sort_by_date();
    match mode {
        WindowMode::Entries => sorted.last_n(period.span()),
        WindowMode::Days => {
            let start = reference_date - Duration::days(period.span() as i64);
            sorted.since(start)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodCount {
    pub token: String,
    pub description: String,
    pub count: usize,
    /// Share of the window, 0–100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodStats {
    /// One row per mood of the table, in table order.
    pub counts: Vec<MoodCount>,
    /// Entries in the window.
    pub total: usize,
    /// Entries whose mood is not in the table.
    pub unrecognized: usize,
    pub most_frequent: Option<MoodCount>,
    pub motivation: String,
    pub last_entry: Option<MoodEntry>,
}

impl MoodStats {
    /// Rows ordered by count, highest first. Equal counts keep table order.
    pub fn ranked(&self) -> Vec<&MoodCount> {
        let mut rows: Vec<&MoodCount> = self.counts.iter().collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }
}

/// Counts, percentages, most frequent mood, motivation and last story for `window`.
///
/// The most frequent mood is the first one in table order that reaches the
/// highest count. It is `None` when no entry carries a known mood, in which
/// case the motivation is the table's fallback.
pub fn summarize(window: &EntryLog, moods: &MoodTable) -> MoodStats {
    let total = window.len();
    let mut counts: Vec<MoodCount> = moods
        .iter()
        .map(|m| MoodCount {
            token: m.token.clone(),
            description: m.description.clone(),
            count: 0,
            percent: 0.0,
        })
        .collect();

    let mut unrecognized = 0;
    for entry in window {
        match counts.iter_mut().find(|c| c.token == entry.mood) {
            Some(row) => row.count += 1,
            None => unrecognized += 1,
        }
    }

    if total > 0 {
        for row in &mut counts {
            row.percent = row.count as f64 / total as f64 * 100.0;
        }
    }

    let mut most_frequent: Option<&MoodCount> = None;
    for row in &counts {
        if row.count > most_frequent.map_or(0, |best| best.count) {
            most_frequent = Some(row);
        }
    }
    let most_frequent = most_frequent.cloned();
    let motivation = moods
        .motivation_for(most_frequent.as_ref().map(|m| m.token.as_str()))
        .to_string();

    MoodStats {
        counts,
        total,
        unrecognized,
        most_frequent,
        motivation,
        last_entry: window.latest().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn log_of(moods: &[&str]) -> EntryLog {
        moods
            .iter()
            .enumerate()
            .map(|(i, m)| MoodEntry::new(d(2024, 3, 1 + i as u32), format!("story {i}"), *m))
            .collect()
    }

    fn count_of(stats: &MoodStats, token: &str) -> (usize, f64) {
        let row = stats.counts.iter().find(|c| c.token == token).unwrap();
        (row.count, row.percent)
    }

    #[test]
    fn counts_and_percentages() {
        let stats = summarize(&log_of(&["😄", "😄", "😐", "😢"]), &MoodTable::default());
        assert_eq!(stats.total, 4);
        assert_eq!(count_of(&stats, "😄"), (2, 50.0));
        assert_eq!(count_of(&stats, "😐"), (1, 25.0));
        assert_eq!(count_of(&stats, "😢"), (1, 25.0));
        assert_eq!(count_of(&stats, "😩"), (0, 0.0));
        assert_eq!(count_of(&stats, "😡"), (0, 0.0));
        assert_eq!(stats.most_frequent.as_ref().map(|m| m.token.as_str()), Some("😄"));
        assert!(stats.motivation.starts_with("Wah keren"));
    }

    #[test]
    fn empty_window_uses_fallback() {
        let table = MoodTable::default();
        let stats = summarize(&EntryLog::new(), &table);
        assert_eq!(stats.total, 0);
        assert!(stats.counts.iter().all(|c| c.count == 0 && c.percent == 0.0));
        assert!(stats.most_frequent.is_none());
        assert_eq!(stats.motivation, table.fallback());
        assert!(stats.last_entry.is_none());
    }

    #[test]
    fn ties_go_to_the_earlier_mood_in_the_table() {
        // 😢 is declared after 😩, both appear twice
        let stats = summarize(&log_of(&["😢", "😩", "😢", "😩"]), &MoodTable::default());
        assert_eq!(stats.most_frequent.map(|m| m.token), Some("😩".to_string()));
    }

    #[test]
    fn unknown_moods_count_toward_total_only() {
        let stats = summarize(&log_of(&["🦀", "😄"]), &MoodTable::default());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.unrecognized, 1);
        assert_eq!(count_of(&stats, "😄"), (1, 50.0));
    }

    #[test]
    fn only_unknown_moods_have_no_most_frequent() {
        let table = MoodTable::default();
        let stats = summarize(&log_of(&["🦀"]), &table);
        assert!(stats.most_frequent.is_none());
        assert_eq!(stats.motivation, table.fallback());
        assert_eq!(stats.last_entry.map(|e| e.mood), Some("🦀".to_string()));
    }

    #[test]
    fn ranked_is_descending_and_stable() {
        let stats = summarize(&log_of(&["😡", "😐", "😡"]), &MoodTable::default());
        let order: Vec<&str> = stats.ranked().iter().map(|c| c.token.as_str()).collect();
        assert_eq!(order, ["😡", "😐", "😄", "😩", "😢"]);
    }

    #[test]
    fn entries_window_takes_last_span_after_sorting() {
        let mut log = EntryLog::new();
        for day in (1..=10).rev() {
            log.append(MoodEntry::new(d(2024, 4, day), format!("day {day}"), "😄"));
        }
        let window = select_window(&log, Period::Weekly, WindowMode::Entries, d(2024, 4, 10));
        let days: Vec<NaiveDate> = window.iter().map(|e| e.date).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days.first(), Some(&d(2024, 4, 4)));
        assert_eq!(days.last(), Some(&d(2024, 4, 10)));
        assert_eq!(window.latest().map(|e| e.story.as_str()), Some("day 10"));
    }

    #[test]
    fn entries_window_keeps_everything_when_short() {
        let log = log_of(&["😄", "😐"]);
        let window = select_window(&log, Period::Monthly, WindowMode::Entries, d(2024, 3, 2));
        assert_eq!(window, log);
    }

    #[test]
    fn days_window_is_relative_to_reference_date() {
        let mut log = EntryLog::new();
        log.append(MoodEntry::new(d(2024, 4, 20), "too old", "😐"));
        log.append(MoodEntry::new(d(2024, 4, 23), "boundary", "😄"));
        log.append(MoodEntry::new(d(2024, 4, 30), "today", "😄"));

        let window = select_window(&log, Period::Weekly, WindowMode::Days, d(2024, 4, 30));
        let stories: Vec<&str> = window.iter().map(|e| e.story.as_str()).collect();
        assert_eq!(stories, ["boundary", "today"]);
    }

    #[test]
    fn period_parses_from_lowercase_name() {
        assert_eq!(Period::from_str("weekly").unwrap(), Period::Weekly);
        assert_eq!(Period::Monthly.as_ref(), "monthly");
        assert_eq!(Period::Monthly.span(), 30);
    }
}
