//! PromptSmith Configuration Module
//!
//! This module handles loading and managing configuration from promptsmith.toml files.
//! It provides a centralized way to manage engine defaults, validation limits and
//! logging preferences.

pub mod constants;
pub mod core;
pub mod loader;

pub use self::core::{EngineConfig, LoggingConfig, ValidationConfig};
pub use loader::{ConfigManager, PromptSmithConfig};
