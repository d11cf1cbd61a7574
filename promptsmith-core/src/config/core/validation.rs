use crate::config::constants::limits;
use serde::{Deserialize, Serialize};

/// Limits applied by `validate_input`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Shortest accepted task description, in characters
    #[serde(default = "default_min_input_chars")]
    pub min_input_chars: usize,

    /// Longest accepted task description, in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_input_chars: default_min_input_chars(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

fn default_min_input_chars() -> usize {
    limits::MIN_INPUT_CHARS
}

fn default_max_input_chars() -> usize {
    limits::MAX_INPUT_CHARS
}
