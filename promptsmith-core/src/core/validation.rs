//! Pre-flight checks on a task description and its options.
//!
//! Every rule runs and every failure is reported, in rule order.

use crate::config::constants::{limits, messages};
use crate::config::core::ValidationConfig;
use crate::prompts::GenerationOptions;
use crate::prompts::options::parse_leading_integer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Character limits applied to the raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_input_chars: usize,
    pub max_input_chars: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_input_chars: limits::MIN_INPUT_CHARS,
            max_input_chars: limits::MAX_INPUT_CHARS,
        }
    }
}

impl From<&ValidationConfig> for ValidationRules {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            min_input_chars: config.min_input_chars,
            max_input_chars: config.max_input_chars,
        }
    }
}

impl ValidationRules {
    /// Check `input` and `options`. The category is accepted as given; an
    /// unknown key is not an error because generation falls back to
    /// `general`.
    pub fn validate(
        &self,
        input: &str,
        _category: &str,
        options: &GenerationOptions,
    ) -> ValidationReport {
        let mut errors = Vec::new();
        let char_count = input.chars().count();

        if input.trim().is_empty() {
            errors.push(messages::INPUT_REQUIRED.to_string());
        }

        // Length rules look at the raw text, so whitespace-only input can
        // also be reported as too short.
        if !input.is_empty() && char_count < self.min_input_chars {
            errors.push(messages::INPUT_TOO_SHORT.to_string());
        }

        if char_count > self.max_input_chars {
            errors.push(messages::input_too_long(self.max_input_chars));
        }

        if let Some(length) = options.length() {
            if parse_leading_integer(length).is_none() {
                errors.push(messages::INVALID_LENGTH.to_string());
            }
        }

        ValidationReport::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(input: &str, options: &GenerationOptions) -> ValidationReport {
        ValidationRules::default().validate(input, "general", options)
    }

    #[test]
    fn empty_input_is_required_only() {
        let report = validate("", &GenerationOptions::default());
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![messages::INPUT_REQUIRED.to_string()]);
    }

    #[test]
    fn whitespace_input_is_required_and_too_short() {
        let report = validate("   ", &GenerationOptions::default());
        assert_eq!(
            report.errors,
            vec![
                messages::INPUT_REQUIRED.to_string(),
                messages::INPUT_TOO_SHORT.to_string()
            ]
        );
    }

    #[test]
    fn long_input_reports_the_limit() {
        let report = validate(&"a".repeat(1001), &GenerationOptions::default());
        assert_eq!(
            report.first_error(),
            Some("Task description is too long. Please keep it under 1000 characters")
        );
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(validate(&"a".repeat(10), &GenerationOptions::default()).is_valid);
        assert!(validate(&"a".repeat(1000), &GenerationOptions::default()).is_valid);
    }

    #[test]
    fn length_needs_a_leading_integer() {
        let bad = GenerationOptions::default().with_length("lots");
        let good = GenerationOptions::default().with_length("300 words");
        let blank = GenerationOptions::default().with_length("  ");

        assert_eq!(
            validate("Write a short story", &bad).errors,
            vec![messages::INVALID_LENGTH.to_string()]
        );
        assert!(validate("Write a short story", &good).is_valid);
        assert!(validate("Write a short story", &blank).is_valid);
    }

    #[test]
    fn errors_accumulate() {
        let options = GenerationOptions::default().with_length("x");
        let report = validate("tiny", &options);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn configured_limits_apply() {
        let rules = ValidationRules::from(&ValidationConfig {
            min_input_chars: 3,
            max_input_chars: 5,
        });
        assert!(rules.validate("abcd", "code", &GenerationOptions::default()).is_valid);
        assert!(!rules.validate("abcdef", "code", &GenerationOptions::default()).is_valid);
    }
}
