//! CLI argument parsing and configuration

use clap::{Args, ColorChoice, Parser, Subcommand, ValueHint};
use promptsmith_core::GenerationOptions;
use promptsmith_core::config::constants::variations;
use std::path::PathBuf;

/// Main CLI structure for promptsmith
#[derive(Parser, Debug)]
#[command(
    name = "promptsmith",
    version,
    about = "Turn short task descriptions into structured, multi-section LLM prompts",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// Configuration file path; skips workspace and home discovery
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Workspace root directory; defaults to current directory
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub workspace: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). `RUST_LOG` takes precedence.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Task text plus the generation options shared by several subcommands
#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    /// Task description; multiple words are joined with spaces
    #[arg(value_name = "TASK", required = true, num_args = 1..)]
    pub task: Vec<String>,

    /// Prompt category (general, writing, analysis, creative, code, research)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Tone, e.g. professional, casual, technical
    #[arg(long, short = 't')]
    pub tone: Option<String>,

    /// Intended audience, e.g. "small business owners"
    #[arg(long, short = 'a')]
    pub audience: Option<String>,

    /// Output format, e.g. "blog post", report, email
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Target length in words
    #[arg(long, short = 'l')]
    pub length: Option<String>,
}

impl PromptArgs {
    pub fn task_text(&self) -> String {
        self.task.join(" ")
    }

    /// Category key as typed; empty means "use the configured default"
    pub fn category_key(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            tone: self.tone.clone(),
            audience: self.audience.clone(),
            format: self.format.clone(),
            length: self.length.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a structured prompt from a task description
    ///
    /// Example: promptsmith generate "Write a blog post about tides" --format "blog post"
    Generate {
        #[command(flatten)]
        prompt: PromptArgs,

        /// Seed for role prompt and technique selection
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON record with the prompt, options and statistics
        #[arg(long)]
        json: bool,

        /// Append prompt statistics
        #[arg(long)]
        stats: bool,

        /// Skip input validation
        #[arg(long)]
        no_validate: bool,
    },

    /// Check a task description and options without generating
    Validate {
        #[command(flatten)]
        prompt: PromptArgs,
    },

    /// Show statistics for a prompt document
    Stats {
        /// Document to analyze; reads stdin when omitted
        #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List prompt categories
    Categories {
        /// Also show each template's structure, role prompts and techniques
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Generate several independently drawn prompts for the same task
    Variations {
        #[command(flatten)]
        prompt: PromptArgs,

        /// Number of variations
        #[arg(long, short = 'n', default_value_t = variations::DEFAULT_COUNT)]
        count: usize,

        /// Seed for the shared random source
        #[arg(long)]
        seed: Option<u64>,

        /// Print variations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default promptsmith.toml into the workspace
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_collects_task_words_and_options() {
        let cli = Cli::try_parse_from([
            "promptsmith",
            "generate",
            "Write",
            "a",
            "blog",
            "post",
            "--category",
            "writing",
            "--format",
            "blog post",
            "--length",
            "500",
            "--seed",
            "9",
            "--stats",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                prompt,
                seed,
                stats,
                json,
                no_validate,
            } => {
                assert_eq!(prompt.task_text(), "Write a blog post");
                assert_eq!(prompt.category_key(), "writing");
                assert_eq!(prompt.options().format.as_deref(), Some("blog post"));
                assert_eq!(prompt.options().length.as_deref(), Some("500"));
                assert_eq!(seed, Some(9));
                assert!(stats);
                assert!(!json);
                assert!(!no_validate);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "promptsmith",
            "categories",
            "--verbose",
            "--no-color",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert!(cli.no_color);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Categories { verbose: true }));
    }

    #[test]
    fn variations_default_to_three() {
        let cli = Cli::try_parse_from(["promptsmith", "variations", "Plan a trip"]).unwrap();
        match cli.command {
            Commands::Variations { count, prompt, .. } => {
                assert_eq!(count, 3);
                assert_eq!(prompt.category_key(), "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn task_is_required() {
        assert!(Cli::try_parse_from(["promptsmith", "generate"]).is_err());
        assert!(Cli::try_parse_from(["promptsmith", "validate"]).is_err());
    }

    #[test]
    fn stats_reads_stdin_without_a_file() {
        let cli = Cli::try_parse_from(["promptsmith", "stats", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Stats {
                file: None,
                json: true
            }
        ));
    }
}
