//! Prompt construction pipeline
//!
//! - [`analyzer`]: turns raw task text into a [`ProcessedInput`]
//! - [`templates`]: per-category role prompts and techniques, plus domain detection
//! - [`catalog`]: technique, tone and format lookup tables
//! - [`composer`]: renders the eight-section prompt document
//! - [`selection`]: the injectable random source used by the composer

pub mod analyzer;
pub mod catalog;
pub mod composer;
pub mod options;
pub mod selection;
pub mod templates;

pub use analyzer::{ComplexityLevel, InputAnalyzer, ProcessedInput, UrgencyLevel};
pub use catalog::Technique;
pub use composer::{PromptComposer, SECTION_TITLES, Section};
pub use options::GenerationOptions;
pub use selection::{FixedSelector, RandomSelector, Selector};
pub use templates::{Category, CategoryTemplate};
