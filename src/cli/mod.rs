//! Command-line interface module
//!
//! Argument definitions live in [`args`]; each subcommand has a
//! `handle_*_command` function in its own module.

pub mod args;
pub mod categories;
pub mod generate;
pub mod init;
pub mod stats;
pub mod validate;
pub mod variations;

pub use args::{Cli, Commands, PromptArgs};
pub use categories::handle_categories_command;
pub use generate::{GenerateFlags, handle_generate_command};
pub use init::handle_init_command;
pub use stats::{handle_stats_command, print_stats_table};
pub use validate::handle_validate_command;
pub use variations::handle_variations_command;
