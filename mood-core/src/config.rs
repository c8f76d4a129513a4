use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::moods::{Mood, MoodTable};
use crate::stats::WindowMode;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON document holding every entry.
    pub data_file: PathBuf,
    /// Directory where `--export` writes CSV files. Defaults to the working directory.
    pub export_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Format used when dates are displayed (not stored). Default is "%A, %d %b %Y".
    pub date_format: String,
    /// How the weekly/monthly windows are cut: by entry count or by calendar days.
    pub window_mode: WindowMode,
    /// "Today" for window selection and for entries captured without a date.
    pub reference_date: NaiveDate,
    pub moods: MoodTable,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_file: Option<PathBuf>,
    export_dir: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
    window_mode: Option<WindowMode>,
    fallback_motivation: Option<String>,
    /// Optional array of tables replacing the built-in mood set:
    /// [[moods]]
    /// token = "😌"
    /// description = "Tenang"
    /// motivation = "Pertahankan energi positifmu ini!"
    moods: Option<Vec<Mood>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let moods = match file_config.moods {
            Some(moods) if !moods.is_empty() => MoodTable::new(
                moods,
                file_config
                    .fallback_motivation
                    .unwrap_or_else(|| MoodTable::default().fallback().to_string()),
            ),
            _ => {
                let mut table = MoodTable::default();
                if let Some(fallback) = file_config.fallback_motivation {
                    table.set_fallback(fallback);
                }
                table
            }
        };

        Self {
            data_file: file_config
                .data_file
                .unwrap_or_else(Self::default_data_file),
            export_dir: file_config.export_dir.unwrap_or_else(|| PathBuf::from(".")),
            editor: file_config.editor,
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%A, %d %b %Y".to_string()),
            window_mode: file_config.window_mode.unwrap_or_default(),
            reference_date: Local::now().date_naive(),
            moods,
        }
    }

    /// Default data document: `{data_dir}/mood/data.json`
    /// - macOS:   `~/Library/Application Support/mood/data.json`
    /// - Linux:   `$XDG_DATA_HOME/mood/data.json` or `~/.local/share/mood/data.json`
    /// - Windows: `%APPDATA%\mood\data.json`
    fn default_data_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("mood").join("data.json")
        } else {
            PathBuf::from("./data.json")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("mood").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("mood").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
