// Configuration for vocabmeter loaders, logging and front end.
// Defaults apply when the corresponding VOCABMETER_* variable is unset.

use std::path::PathBuf;
use tracing::warn;

/// How entries are separated in a vocabulary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListDelimiter {
    /// One entry per line (`\n` or `\r\n`)
    #[default]
    Lines,
    /// Any run of whitespace separates entries
    Whitespace,
}

impl ListDelimiter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lines" | "line" => Some(ListDelimiter::Lines),
            "whitespace" | "space" => Some(ListDelimiter::Whitespace),
            _ => None,
        }
    }

    /// Splits raw list text into untrimmed entries.
    pub fn split<'a>(self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            ListDelimiter::Lines => Box::new(text.lines()),
            ListDelimiter::Whitespace => Box::new(text.split_whitespace()),
        }
    }
}

/// Where the reference word lists come from.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyConfig {
    /// Known word list (default `known.txt`)
    pub known_path: PathBuf,

    /// NGL list; `None` disables NGL classification (default `ngl.txt`)
    pub ngl_path: Option<PathBuf>,

    pub delimiter: ListDelimiter,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            known_path: PathBuf::from("known.txt"),
            ngl_path: Some(PathBuf::from("ngl.txt")),
            delimiter: ListDelimiter::Lines,
        }
    }
}

/// Master configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub vocabulary: VocabularyConfig,

    /// `tracing_subscriber::EnvFilter` directives (default `vocabmeter=info`)
    pub log_filter: String,

    /// Log destination; the terminal is owned by the UI
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: VocabularyConfig::default(),
            log_filter: "vocabmeter=info".to_string(),
            log_file: std::env::temp_dir().join("vocabmeter.log"),
        }
    }
}

pub const ENV_KNOWN: &str = "VOCABMETER_KNOWN";
pub const ENV_NGL: &str = "VOCABMETER_NGL";
pub const ENV_DELIMITER: &str = "VOCABMETER_DELIMITER";
pub const ENV_LOG: &str = "VOCABMETER_LOG";
pub const ENV_LOG_FILE: &str = "VOCABMETER_LOG_FILE";

impl Config {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Overlays values returned by `lookup` for each `VOCABMETER_*` key.
    /// An empty `VOCABMETER_NGL` disables the NGL list.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_KNOWN).filter(|p| !p.trim().is_empty()) {
            self.vocabulary.known_path = PathBuf::from(path);
        }

        if let Some(path) = lookup(ENV_NGL) {
            self.vocabulary.ngl_path = if path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(value) = lookup(ENV_DELIMITER) {
            match ListDelimiter::parse(&value) {
                Some(delimiter) => self.vocabulary.delimiter = delimiter,
                None => warn!(value = %value, "unrecognised list delimiter, keeping default"),
            }
        }

        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            self.log_filter = filter;
        }

        if let Some(path) = lookup(ENV_LOG_FILE).filter(|p| !p.trim().is_empty()) {
            self.log_file = PathBuf::from(path);
        }
    }
}
