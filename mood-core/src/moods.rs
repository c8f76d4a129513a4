//! The mood lookup table: which tokens exist, what they mean, and what to say about them.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// One selectable mood.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Mood {
    /// The emoji stored in each entry.
    pub token: String,
    /// Human-readable name shown next to the emoji.
    pub description: String,
    /// Message shown when this is the most frequent mood of a window.
    pub motivation: String,
}

/// Ordered set of moods plus the message used when no mood stands out.
///
/// Declaration order matters: statistics list moods in this order and break
/// ties for the most frequent mood in favour of the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodTable {
    moods: Vec<Mood>,
    fallback: String,
}

static DEFAULT_TABLE: Lazy<MoodTable> = Lazy::new(|| {
    let moods = [
        (
            "😄",
            "Senang",
            "Wah keren sekali, tetap bahagia ya! Senyummu itu menular, semoga harimu selalu cerah!",
        ),
        (
            "😩",
            "Lelah",
            "Ingat, istirahat itu penting. Semoga kamu segera merasa lebih segar dan semangat lagi!",
        ),
        (
            "😐",
            "Biasa saja",
            "Hari-hari biasa juga berarti kamu stabil, terus jalani dengan santai dan jangan lupa bahagia ya!",
        ),
        (
            "😢",
            "Sedih",
            "Sedih itu hal biasa, jangan dipikirin terlalu berat. Istirahat dulu kalau perlu, nanti juga akan lewat kok.",
        ),
        (
            "😡",
            "Marah",
            "Tenang dulu, yuk coba tarik napas dalam-dalam. Jangan biarkan amarah menguasaimu, kamu kuat kok!",
        ),
    ]
    .into_iter()
    .map(|(token, description, motivation)| Mood {
        token: token.to_string(),
        description: description.to_string(),
        motivation: motivation.to_string(),
    })
    .collect();

    MoodTable {
        moods,
        fallback: "Tetaplah menulis dan sadari perasaanmu setiap hari.".to_string(),
    }
});

impl Default for MoodTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl MoodTable {
    pub fn new(moods: Vec<Mood>, fallback: String) -> Self {
        Self { moods, fallback }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mood> {
        self.moods.iter()
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn set_fallback(&mut self, fallback: String) {
        self.fallback = fallback;
    }

    /// Exact lookup by stored token.
    pub fn get(&self, token: &str) -> Option<&Mood> {
        self.moods.iter().find(|m| m.token == token)
    }

    /// Lookup for user input: the emoji itself or its description, case-insensitive.
    pub fn resolve(&self, input: &str) -> Option<&Mood> {
        let input = input.trim();
        self.get(input).or_else(|| {
            let lowered = input.to_lowercase();
            self.moods
                .iter()
                .find(|m| m.description.to_lowercase() == lowered)
        })
    }

    /// Description for a token, `-` when the token is unknown.
    pub fn describe<'a>(&'a self, token: &str) -> &'a str {
        self.get(token).map(|m| m.description.as_str()).unwrap_or("-")
    }

    /// Canned message for the most frequent mood, or the fallback.
    pub fn motivation_for(&self, token: Option<&str>) -> &str {
        token
            .and_then(|t| self.get(t))
            .map(|m| m.motivation.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}
