use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};

/// Engine-wide settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Category used when the caller does not pass one
    /// (general, writing, analysis, creative, code, research)
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Fixed seed for role prompt and technique selection.
    /// Leave unset to draw from system entropy on every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Reading speed used for the estimated reading time statistic
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            seed: None,
            words_per_minute: default_words_per_minute(),
        }
    }
}

fn default_category() -> String {
    defaults::DEFAULT_CATEGORY.to_string()
}

fn default_words_per_minute() -> usize {
    defaults::DEFAULT_WORDS_PER_MINUTE
}
