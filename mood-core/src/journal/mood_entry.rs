use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One journal record as stored in the data document.
///
/// `date` serializes as `YYYY-MM-DD`. `mood` is kept as the raw token so a
/// document written with another mood table still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub story: String,
    pub mood: String,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, story: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            date,
            story: story.into(),
            mood: mood.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_iso_date() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let entry = MoodEntry::new(d, "great day", "😄");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-03","story":"great day","mood":"😄"}"#);
    }

    #[test]
    fn rejects_impossible_dates() {
        let json = r#"{"date":"2024-02-30","story":"x","mood":"😄"}"#;
        assert!(serde_json::from_str::<MoodEntry>(json).is_err());
    }
}
