use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};

/// Size and shape metrics for a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptStats {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    /// Bold markers (`**`) divided by two
    pub sections: usize,
    /// Minutes, rounded up
    pub estimated_reading_time: usize,
}

impl PromptStats {
    pub fn from_document(document: &str) -> Self {
        Self::with_reading_speed(document, defaults::DEFAULT_WORDS_PER_MINUTE)
    }

    pub fn with_reading_speed(document: &str, words_per_minute: usize) -> Self {
        let words = document.split_whitespace().count();
        let sentences = document
            .split(['.', '!', '?'])
            .filter(|fragment| !fragment.trim().is_empty())
            .count();

        Self {
            words,
            characters: document.chars().count(),
            sentences,
            sections: document.matches("**").count() / 2,
            estimated_reading_time: words.div_ceil(words_per_minute.max(1)),
        }
    }
}
