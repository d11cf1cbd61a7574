//! # promptsmith-core - Prompt generation engine
//!
//! `promptsmith-core` turns a short free-text task description into a long,
//! structured prompt document suitable for pasting into an LLM.
//!
//! ## Highlights
//!
//! - **Heuristic Analysis**: main task, keywords, implied requirements,
//!   urgency and complexity are derived from the raw text with plain
//!   substring matching.
//! - **Category Templates**: six static templates (general, writing,
//!   analysis, creative, code, research), each with role prompts and
//!   preferred prompting techniques.
//! - **Deterministic Composition**: the eight-section document depends only
//!   on the input, the options and two draws from an injectable
//!   [`prompts::Selector`].
//! - **Configuration-First**: engine defaults, validation limits and default
//!   options come from `promptsmith.toml`, with every constant centralized in
//!   `config::constants`.
//!
//! ## Architecture Overview
//!
//! - `config/`: `promptsmith.toml` loader, defaults and constants.
//! - `prompts/`: analyzer, template registry, lookup tables and composer.
//! - `core/`: the [`PromptEngine`] facade, validation and statistics.
//!
//! ## Quickstart
//!
//! ```rust
//! use promptsmith_core::{GenerationOptions, PromptEngine};
//!
//! let engine = PromptEngine::new().with_seed(42);
//! let options = GenerationOptions::default()
//!     .with_tone("professional")
//!     .with_length("500");
//!
//! let report = engine.validate_input("Write a blog post about tides", "writing", &options);
//! assert!(report.is_valid);
//!
//! let prompt = engine
//!     .generate("Write a blog post about tides", "writing", &options)
//!     .expect("input is not empty");
//! assert!(prompt.starts_with("## ROLE & EXPERTISE"));
//! ```

pub mod config;
pub mod core;
pub mod prompts;

pub use config::{ConfigManager, PromptSmithConfig};
pub use crate::core::{
    EngineError, GenerationRecord, PromptEngine, PromptStats, PromptVariation, ValidationReport,
    VariationStyle,
};
pub use prompts::{Category, FixedSelector, GenerationOptions, RandomSelector, Selector};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let engine = PromptEngine::default();
        let stats = engine.get_stats("**Role:** writer");
        assert_eq!(stats.sections, 1);
        assert_eq!(Category::resolve("CODE"), Category::Code);
    }
}
