//! Heuristic analysis of the raw task description.
//!
//! Everything here is plain substring matching over lowercased text; the
//! signals are pure functions of the input.

use crate::config::constants::limits;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const ACTION_WORDS: &[&str] = &[
    "write",
    "create",
    "analyze",
    "design",
    "build",
    "develop",
    "research",
    "explain",
    "summarize",
    "compare",
    "evaluate",
    "plan",
    "generate",
    "optimize",
];

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "about", "into", "through", "during", "before", "after", "above", "below", "up", "down",
    "out", "off", "over", "under", "again", "further", "then", "once", "is", "are", "was",
    "were", "be",
];

const URGENT_WORDS: &[&str] = &[
    "urgent",
    "asap",
    "immediately",
    "quickly",
    "fast",
    "rush",
    "deadline",
];

const COMPLEX_WORDS: &[&str] = &[
    "comprehensive",
    "detailed",
    "analysis",
    "research",
    "strategy",
    "framework",
    "methodology",
];

const SIMPLE_WORDS: &[&str] = &["simple", "basic", "quick", "brief", "overview", "summary"];

struct RequirementRule {
    triggers: &'static [&'static str],
    requirement: &'static str,
}

const REQUIREMENT_RULES: &[RequirementRule] = &[
    RequirementRule {
        triggers: &["professional", "business"],
        requirement: "Professional tone and presentation",
    },
    RequirementRule {
        triggers: &["beginner", "simple", "easy"],
        requirement: "Accessible language for beginners",
    },
    RequirementRule {
        triggers: &["detailed", "comprehensive", "thorough"],
        requirement: "Comprehensive and detailed coverage",
    },
    RequirementRule {
        triggers: &["quick", "brief", "summary"],
        requirement: "Concise and to-the-point delivery",
    },
    RequirementRule {
        triggers: &["creative", "innovative", "unique"],
        requirement: "Creative and original approach",
    },
    RequirementRule {
        triggers: &["step", "guide", "how to"],
        requirement: "Step-by-step instructions",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Normal,
    High,
}

impl UrgencyLevel {
    /// Capitalized name used in rendered prompts
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Normal => "Normal",
            UrgencyLevel::High => "High",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyLevel::Normal => write!(f, "normal"),
            UrgencyLevel::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    /// Capitalized name used in rendered prompts
    pub fn label(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "Low",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::High => "High",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityLevel::Low => write!(f, "low"),
            ComplexityLevel::Medium => write!(f, "medium"),
            ComplexityLevel::High => write!(f, "high"),
        }
    }
}

/// Structured signals extracted from one task description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedInput {
    pub original_input: String,
    pub main_task: String,
    pub keywords: Vec<String>,
    pub implied_requirements: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub complexity_level: ComplexityLevel,
}

pub struct InputAnalyzer;

impl InputAnalyzer {
    /// Analyze a task description. Callers reject empty input beforehand;
    /// this never fails.
    pub fn process(raw: &str) -> ProcessedInput {
        let input = raw.trim();
        let processed = ProcessedInput {
            original_input: input.to_string(),
            main_task: Self::extract_main_task(input),
            keywords: Self::extract_keywords(input),
            implied_requirements: Self::extract_implied_requirements(input),
            urgency_level: Self::detect_urgency(input),
            complexity_level: Self::estimate_complexity(input),
        };

        debug!(
            target = "analyzer",
            keywords = processed.keywords.len(),
            requirements = processed.implied_requirements.len(),
            urgency = %processed.urgency_level,
            complexity = %processed.complexity_level,
            "processed input"
        );
        processed
    }

    /// The input from its first action word onward, or the whole input when
    /// no token contains an action word.
    pub fn extract_main_task(input: &str) -> String {
        let lowered = input.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        let action_index = words
            .iter()
            .position(|word| ACTION_WORDS.iter().any(|action| word.contains(action)));

        match action_index {
            Some(index) => capitalize_first(&words[index..].join(" ")),
            None => capitalize_first(input),
        }
    }

    pub fn extract_keywords(input: &str) -> Vec<String> {
        let cleaned: String = input
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| word.chars().count() > limits::MAX_IGNORED_TOKEN_CHARS)
            .filter(|word| !STOP_WORDS.contains(word))
            .unique()
            .take(limits::MAX_KEYWORDS)
            .map(str::to_string)
            .collect()
    }

    pub fn extract_implied_requirements(input: &str) -> Vec<String> {
        let lowered = input.to_lowercase();
        REQUIREMENT_RULES
            .iter()
            .filter(|rule| contains_any(&lowered, rule.triggers))
            .map(|rule| rule.requirement.to_string())
            .collect()
    }

    pub fn detect_urgency(input: &str) -> UrgencyLevel {
        if contains_any(&input.to_lowercase(), URGENT_WORDS) {
            UrgencyLevel::High
        } else {
            UrgencyLevel::Normal
        }
    }

    pub fn estimate_complexity(input: &str) -> ComplexityLevel {
        let lowered = input.to_lowercase();
        let complex = count_hits(&lowered, COMPLEX_WORDS);
        let simple = count_hits(&lowered, SIMPLE_WORDS);

        match complex.cmp(&simple) {
            std::cmp::Ordering::Greater => ComplexityLevel::High,
            std::cmp::Ordering::Less => ComplexityLevel::Low,
            std::cmp::Ordering::Equal => ComplexityLevel::Medium,
        }
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

fn count_hits(text: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|needle| text.contains(*needle)).count()
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_task_starts_at_first_action_word() {
        assert_eq!(
            InputAnalyzer::extract_main_task("Please write a Poem about Autumn"),
            "Write a poem about autumn"
        );
    }

    #[test]
    fn main_task_matches_action_substrings() {
        assert_eq!(
            InputAnalyzer::extract_main_task("kindly rewrite my intro"),
            "Rewrite my intro"
        );
    }

    #[test]
    fn main_task_falls_back_to_whole_input() {
        assert_eq!(
            InputAnalyzer::extract_main_task("help me with my Taxes"),
            "Help me with my Taxes"
        );
    }

    #[test]
    fn keywords_drop_stop_words_short_tokens_and_punctuation() {
        let keywords = InputAnalyzer::extract_keywords("Write a blog post about the Moon, the moon!");
        assert_eq!(keywords, vec!["write", "blog", "post", "moon"]);
    }

    #[test]
    fn keywords_are_capped() {
        let keywords = InputAnalyzer::extract_keywords(
            "alpha bravo charlie delta echo foxtrot golf hotel india juliet",
        );
        assert_eq!(keywords.len(), 8);
        assert_eq!(keywords.last().map(String::as_str), Some("hotel"));
    }

    #[test]
    fn requirements_follow_rule_order() {
        let requirements = InputAnalyzer::extract_implied_requirements(
            "A step by step guide with a creative twist for a business audience",
        );
        assert_eq!(
            requirements,
            vec![
                "Professional tone and presentation",
                "Creative and original approach",
                "Step-by-step instructions",
            ]
        );
    }

    #[test]
    fn urgency_uses_substrings() {
        assert_eq!(InputAnalyzer::detect_urgency("Need this ASAP"), UrgencyLevel::High);
        assert_eq!(InputAnalyzer::detect_urgency("breakfast ideas"), UrgencyLevel::High);
        assert_eq!(InputAnalyzer::detect_urgency("a calm essay"), UrgencyLevel::Normal);
    }

    #[test]
    fn complexity_compares_hit_counts() {
        assert_eq!(
            InputAnalyzer::estimate_complexity("a detailed strategy"),
            ComplexityLevel::High
        );
        assert_eq!(
            InputAnalyzer::estimate_complexity("a quick overview"),
            ComplexityLevel::Low
        );
        assert_eq!(
            InputAnalyzer::estimate_complexity("a detailed but brief note"),
            ComplexityLevel::Medium
        );
        assert_eq!(InputAnalyzer::estimate_complexity("a poem"), ComplexityLevel::Medium);
    }

    #[test]
    fn process_trims_original_input() {
        let processed = InputAnalyzer::process("  explain recursion  ");
        assert_eq!(processed.original_input, "explain recursion");
        assert_eq!(processed.main_task, "Explain recursion");
    }

    #[test]
    fn levels_serialize_lowercase() {
        let json = serde_json::to_string(&ComplexityLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        assert_eq!(UrgencyLevel::Normal.to_string(), "normal");
        assert_eq!(UrgencyLevel::High.label(), "High");
    }
}
