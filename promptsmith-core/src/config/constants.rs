/// Category keys understood by the template registry
pub mod categories {
    pub const GENERAL: &str = "general";
    pub const WRITING: &str = "writing";
    pub const ANALYSIS: &str = "analysis";
    pub const CREATIVE: &str = "creative";
    pub const CODE: &str = "code";
    pub const RESEARCH: &str = "research";

    /// Registry order, also the order reported by `list_categories`
    pub const ALL: &[&str] = &[GENERAL, WRITING, ANALYSIS, CREATIVE, CODE, RESEARCH];
}

/// Default configuration values
pub mod defaults {
    use super::categories;

    pub const DEFAULT_CATEGORY: &str = categories::GENERAL;
    pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    /// Substituted into role prompts when no domain keyword matches
    pub const DEFAULT_DOMAIN: &str = "your specialized field";
}

/// Input and output limits
pub mod limits {
    pub const MIN_INPUT_CHARS: usize = 10;
    pub const MAX_INPUT_CHARS: usize = 1_000;
    pub const MAX_KEYWORDS: usize = 8;
    /// Tokens this short or shorter never become keywords
    pub const MAX_IGNORED_TOKEN_CHARS: usize = 2;
    /// Tolerance around the requested word count, in percent
    pub const LENGTH_TOLERANCE_PERCENT: i64 = 10;
}

/// Configuration file locations
pub mod files {
    pub const CONFIG_FILE_NAME: &str = "promptsmith.toml";
    pub const CONFIG_DIR_NAME: &str = ".promptsmith";
}

/// Validation error messages
pub mod messages {
    pub const INPUT_REQUIRED: &str = "Task description is required";
    pub const INPUT_TOO_SHORT: &str = "Please provide a more detailed task description";
    pub const INVALID_LENGTH: &str = "Length must be a valid number";

    pub fn input_too_long(max_chars: usize) -> String {
        format!("Task description is too long. Please keep it under {max_chars} characters")
    }
}

/// Prompt variation defaults
pub mod variations {
    pub const DEFAULT_COUNT: usize = 3;
    pub const MAX_COUNT: usize = 10;
}
