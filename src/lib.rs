//! # PromptSmith - Structured prompt generator
//!
//! PromptSmith turns a one-line task description into a long, structured
//! prompt with role, task, methodology, instructions, output format, quality
//! standards, examples and validation sections.
//!
//! ## Quickstart
//!
//! ```bash
//! # Write a default promptsmith.toml into the current directory
//! promptsmith init
//!
//! # Generate a prompt
//! promptsmith generate "Write a detailed blog post about renewable energy" \
//!     --category writing --tone professional --format "blog post" --length 500
//!
//! # Check input without generating
//! promptsmith validate "short"
//! ```
//!
//! The engine itself lives in `promptsmith-core`; this crate only provides
//! the command-line shell.

pub mod cli;
