//! Validation of user input before it becomes a [`MoodEntry`].

use crate::journal::MoodEntry;
use crate::moods::{Mood, MoodTable};
use chrono::NaiveDate;
use thiserror::Error;

/// Format of dates typed by the user and stored in the document.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("'{input}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error("the {0} must not be empty")]
    MissingField(&'static str),
    #[error("unknown mood '{0}', see `mood --moods`")]
    UnknownMood(String),
}

/// Raw input for a new entry, as received from the user.
#[derive(Debug, Clone, Default)]
pub struct NewEntry<'a> {
    /// `YYYY-MM-DD`. `None` means the reference date.
    pub date: Option<&'a str>,
    pub story: &'a str,
    /// Emoji token or its description.
    pub mood: &'a str,
}

impl NewEntry<'_> {
    /// Checks every field and builds the entry to persist.
    ///
    /// The mood is normalized to its table token. The story is stored as typed.
    pub fn validate(
        &self,
        moods: &MoodTable,
        reference_date: NaiveDate,
    ) -> Result<MoodEntry, CaptureError> {
        let (date, mood) = self.check_header(moods, reference_date)?;
        if self.story.trim().is_empty() {
            return Err(CaptureError::MissingField("story"));
        }
        Ok(MoodEntry::new(date, self.story, mood.token.clone()))
    }

    /// Checks the date and the mood only, so they can be rejected before a story is asked for.
    pub fn check_header<'m>(
        &self,
        moods: &'m MoodTable,
        reference_date: NaiveDate,
    ) -> Result<(NaiveDate, &'m Mood), CaptureError> {
        let date = match self.date.map(str::trim) {
            None | Some("") => reference_date,
            Some(input) => parse_entry_date(input)?,
        };

        let mood = self.mood.trim();
        if mood.is_empty() {
            return Err(CaptureError::MissingField("mood"));
        }
        let mood = moods
            .resolve(mood)
            .ok_or_else(|| CaptureError::UnknownMood(mood.to_string()))?;

        Ok((date, mood))
    }
}

pub fn parse_entry_date(input: &str) -> Result<NaiveDate, CaptureError> {
    NaiveDate::parse_from_str(input, ENTRY_DATE_FORMAT).map_err(|_| CaptureError::InvalidDate {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
    }

    #[test]
    fn valid_input_becomes_entry() {
        let input = NewEntry {
            date: Some("2025-08-01"),
            story: "  Went hiking.  ",
            mood: "senang",
        };
        let entry = input.validate(&MoodTable::default(), today()).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        assert_eq!(entry.story, "  Went hiking.  ");
        assert_eq!(entry.mood, "😄");
    }

    #[test]
    fn missing_date_uses_reference_date() {
        let input = NewEntry {
            date: None,
            story: "Quiet day",
            mood: "😐",
        };
        let entry = input.validate(&MoodTable::default(), today()).unwrap();
        assert_eq!(entry.date, today());
    }

    #[test]
    fn impossible_or_badly_formatted_dates_are_rejected() {
        for bad in ["2025-02-30", "15/08/2025", "yesterday"] {
            let input = NewEntry {
                date: Some(bad),
                story: "x",
                mood: "😄",
            };
            assert_eq!(
                input.validate(&MoodTable::default(), today()),
                Err(CaptureError::InvalidDate {
                    input: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn blank_story_or_mood_is_missing() {
        let table = MoodTable::default();
        let no_story = NewEntry {
            date: None,
            story: "   ",
            mood: "😄",
        };
        assert_eq!(
            no_story.validate(&table, today()),
            Err(CaptureError::MissingField("story"))
        );
        let no_mood = NewEntry {
            date: None,
            story: "text",
            mood: "",
        };
        assert_eq!(
            no_mood.validate(&table, today()),
            Err(CaptureError::MissingField("mood"))
        );
    }

    #[test]
    fn mood_outside_table_is_rejected() {
        let input = NewEntry {
            date: None,
            story: "text",
            mood: "🦀",
        };
        assert_eq!(
            input.validate(&MoodTable::default(), today()),
            Err(CaptureError::UnknownMood("🦀".to_string()))
        );
    }

    #[test]
    fn header_is_checked_without_a_story() {
        let table = MoodTable::default();
        let unknown = NewEntry {
            date: None,
            story: "",
            mood: "🦀",
        };
        assert_eq!(
            unknown.check_header(&table, today()),
            Err(CaptureError::UnknownMood("🦀".to_string()))
        );

        let bad_date = NewEntry {
            date: Some("2024-13-40"),
            story: "",
            mood: "😄",
        };
        assert!(matches!(
            bad_date.check_header(&table, today()),
            Err(CaptureError::InvalidDate { .. })
        ));

        let ok = NewEntry {
            date: Some("2025-08-01"),
            story: "",
            mood: "lelah",
        };
        let (date, mood) = ok.check_header(&table, today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        assert_eq!(mood.token, "😩");
    }

    #[test]
    fn story_is_kept_as_typed() {
        let input = NewEntry {
            date: None,
            story: "first line\n\n  indented  \n",
            mood: "😐",
        };
        let entry = input.validate(&MoodTable::default(), today()).unwrap();
        assert_eq!(entry.story, "first line\n\n  indented  \n");
    }
}
