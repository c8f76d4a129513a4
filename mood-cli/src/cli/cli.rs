use clap::{ArgAction, ArgGroup, Parser};
use mood_core::Period;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

use crate::render::ColorMode;

/// mood — A small mood journal
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("read_mode").args(["history", "search"])),
    group(ArgGroup::new("write_mode").args(["mood"]).conflicts_with("read_mode")),
    group(ArgGroup::new("solo").args(["path", "moods"]).conflicts_with_all(["read_mode", "write_mode"])),
)]
pub struct Cli {
    /// Prints the path of the data file
    #[arg(long, short)]
    pub path: bool,
    /// Lists the available moods and their descriptions.
    #[arg(long)]
    pub moods: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Use this data file instead of the configured one.
    #[arg(long, short, env = "MOOD_FILE")]
    pub file: Option<PathBuf>,
    /// Log more details to stderr (`-v` info, `-vv` debug). `RUST_LOG` is used otherwise.
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,

    /// Record a new entry with this mood, as emoji or description (e.g. `mood -m senang Went hiking`).
    #[arg(long, short)]
    pub mood: Option<String>,
    /// Date of the new entry as YYYY-MM-DD. Defaults to today.
    #[arg(long, short, requires = "mood")]
    pub date: Option<String>,

    /// Show statistics for the last week or month (e.g. `mood --history weekly`).
    #[arg(long, short = 'H', value_parser = parse_period)]
    pub history: Option<Period>,
    /// Also write the shown period to a CSV file.
    #[arg(long, requires = "history")]
    pub export: bool,
    /// Directory for `--export`. Defaults to the configured export directory.
    #[arg(long, requires = "export")]
    pub export_dir: Option<PathBuf>,
    /// Search stories containing a keyword, ignoring case (e.g. `mood --search exam`).
    #[arg(long, short)]
    pub search: Option<String>,

    /// The story for the new entry. Opens your $EDITOR when empty.
    #[arg(requires = "mood")]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

fn parse_period(input: &str) -> Result<Period, String> {
    Period::from_str(&input.to_lowercase()).map_err(|_| {
        let names: Vec<String> = Period::iter().map(|p| p.to_string()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}
