//! Extraction configuration
//!
//! Every knob the engine consults is carried explicitly in [`ExtractionConfig`]
//! instead of living in module-level constants. All fields have defaults, so a
//! partial JSON document (or `{}`) is a valid configuration.

use crate::error::{Result, StatementError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NOISE_WORDS: [&str; 3] = ["total", "balance details", "summary"];
pub const DEFAULT_HEADER_LINES: [&str; 2] = ["Description", "Total"];
pub const DEFAULT_SECTION_START: &str = "Top Holdings";
pub const DEFAULT_SECTION_END: &str = "Asset Allocation";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionConfig {
    /// Case-insensitive substrings that mark a line as a total/header, not a holding
    pub noise_words: Vec<String>,
    /// Exact lines skipped inside the holdings section
    pub header_lines: Vec<String>,
    pub section_start: String,
    pub section_end: String,
    /// Cap on the number of holdings returned; `None` keeps everything
    pub top_n: Option<usize>,
    pub sort_by_value: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            noise_words: DEFAULT_NOISE_WORDS.iter().map(|w| w.to_string()).collect(),
            header_lines: DEFAULT_HEADER_LINES.iter().map(|h| h.to_string()).collect(),
            section_start: DEFAULT_SECTION_START.to_string(),
            section_end: DEFAULT_SECTION_END.to_string(),
            top_n: None,
            sort_by_value: true,
        }
    }
}

impl ExtractionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StatementError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded extraction config from {}", path.display());
        Self::from_json_str(&content)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.section_start.trim().is_empty() || self.section_end.trim().is_empty() {
            return Err(StatementError::InvalidConfig(
                "section markers must not be empty".to_string(),
            ));
        }
        if self.top_n == Some(0) {
            return Err(StatementError::InvalidConfig(
                "topN must be at least 1 (omit it for no limit)".to_string(),
            ));
        }
        if self.noise_words.iter().any(|w| w.trim().is_empty()) {
            return Err(StatementError::InvalidConfig(
                "noise words must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// True when `text` contains any noise word, ignoring case.
    pub fn is_noise(&self, text: &str) -> bool {
        contains_noise_word(text, &self.noise_words)
    }
}

pub(crate) fn contains_noise_word(text: &str, noise_words: &[String]) -> bool {
    let lower = text.to_lowercase();
    noise_words
        .iter()
        .any(|word| lower.contains(&word.to_lowercase()))
}
