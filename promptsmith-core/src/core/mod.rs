//! # Engine
//!
//! [`engine::PromptEngine`] ties the pipeline together: analyze the task,
//! resolve the category template, compose the document. Validation and
//! statistics are independent of generation; `generate` does not validate.

pub mod engine;
pub mod error;
pub mod stats;
pub mod validation;

pub use engine::{GenerationRecord, PromptEngine, PromptVariation, VariationStyle};
pub use error::EngineError;
pub use stats::PromptStats;
pub use validation::{ValidationReport, ValidationRules};
