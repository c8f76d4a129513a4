use super::theme::Journal;
use mood_core::{EntryLog, History, LoadError, MoodEntry, MoodTable};
use regex::{Regex, RegexBuilder};
use std::fmt::Write;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        let opts = match config {
            Some(config) => config,
            None => RenderOptions {
                date_format: "%a, %d %b %Y".to_string(),
                use_color: true,
            },
        };
        Self {
            skin: skin_for(opts.use_color),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        self.skin.print_text(&md);
    }

    pub fn print_entry_line(&self, entry: &MoodEntry) {
        let mut date = entry.date.format(&self.opts.date_format).to_string();
        let mut story = entry.story.trim().to_string();
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            story = story.with(Color::Yellow).to_string();
        }
        println!("{} {} - {}", date, entry.mood, story);
    }

    /// Prints every entry of `log`, highlighting `keyword` in the stories when given.
    pub fn print_entries(&self, log: &EntryLog, keyword: Option<&str>) {
        if log.is_empty() {
            self.print_info("No entries found.");
            return;
        }
        let md = entries_markdown(log, &self.opts.date_format, keyword);
        self.print_md(&md);
    }

    pub fn print_history(&self, history: &History, moods: &MoodTable) {
        let md = history_markdown(history, moods, &self.opts.date_format);
        self.print_md(&md);
    }

    pub fn print_moods(&self, moods: &MoodTable) {
        let mut md = String::from("|:-:|:-|\n|**Mood**|**Description**|\n|-|\n");
        for mood in moods.iter() {
            let _ = writeln!(md, "|{}|{}|", mood.token, mood.description);
        }
        md.push_str("|-|\n");
        self.print_md(&md);
    }

    pub fn print_errors(&self, errors: &[LoadError]) {
        if errors.is_empty() {
            return;
        }
        self.print_md("\n# Errors:");
        for error in errors {
            self.print_md(&format!("* {error}"));
        }
    }
}

/// The journal palette, or a plain skin that still lays out tables and headers.
fn skin_for(use_color: bool) -> MadSkin {
    if use_color {
        Journal::default_journal_skin()
    } else {
        MadSkin::no_style()
    }
}

pub(crate) fn entries_markdown(log: &EntryLog, date_format: &str, keyword: Option<&str>) -> String {
    let highlighter = keyword.and_then(keyword_regex);
    let mut md = String::new();
    for entry in log {
        let story = match &highlighter {
            Some(re) => re.replace_all(entry.story.trim(), "`$0`").to_string(),
            None => entry.story.trim().to_string(),
        };
        let _ = writeln!(
            md,
            "## {} {}\n{}\n",
            entry.date.format(date_format),
            entry.mood,
            story
        );
    }
    md
}

pub(crate) fn history_markdown(history: &History, moods: &MoodTable, date_format: &str) -> String {
    let stats = &history.stats;
    let mut md = String::new();
    let _ = writeln!(md, "# {} mood stats\n", history.period.title());

    md.push_str("|:-:|:-|-:|-:|\n|**Mood**|**Description**|**Count**|**Share**|\n|-|\n");
    for row in stats.ranked() {
        let _ = writeln!(
            md,
            "|{}|{}|{}|{:.1}%|",
            row.token, row.description, row.count, row.percent
        );
    }
    md.push_str("|-|\n");
    if stats.unrecognized > 0 {
        let _ = writeln!(md, "*{} entries with an unknown mood.*", stats.unrecognized);
    }

    match &stats.most_frequent {
        Some(mood) => {
            let _ = writeln!(md, "\n**Most frequent:** {} ({})", mood.token, mood.description);
        }
        None => {
            let _ = writeln!(md, "\n**Most frequent:** -");
        }
    }
    let _ = writeln!(md, "\n> {}", stats.motivation);

    if let Some(last) = &stats.last_entry {
        let _ = writeln!(
            md,
            "\n## Last story\n**{}** - {} ({})\n{}",
            last.date.format(date_format),
            last.mood,
            moods.describe(&last.mood),
            last.story.trim()
        );
    }
    md
}

fn keyword_regex(keyword: &str) -> Option<Regex> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .ok()
}
