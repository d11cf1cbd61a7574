use anyhow::Result;
use clap::Parser;
use promptsmith::cli::{self, Cli, Commands, GenerateFlags};
use promptsmith_core::config::constants::files;
use promptsmith_core::{ConfigManager, PromptEngine};
use std::fs;
use tempfile::TempDir;

fn prompt_args(argv: &[&str]) -> cli::PromptArgs {
    let cli = Cli::parse_from(argv);
    match cli.command {
        Commands::Generate { prompt, .. }
        | Commands::Validate { prompt }
        | Commands::Variations { prompt, .. } => prompt,
        other => panic!("no prompt arguments in {other:?}"),
    }
}

#[test]
fn validate_reports_short_input_as_invalid() -> Result<()> {
    let engine = PromptEngine::new();
    let prompt = prompt_args(&["promptsmith", "validate", "short"]);
    assert!(!cli::handle_validate_command(&engine, &prompt)?);

    let prompt = prompt_args(&["promptsmith", "validate", "Write a blog post about tides"]);
    assert!(cli::handle_validate_command(&engine, &prompt)?);
    Ok(())
}

#[test]
fn generate_fails_on_invalid_length_unless_validation_is_skipped() -> Result<()> {
    let engine = PromptEngine::new().with_seed(5);
    let prompt = prompt_args(&[
        "promptsmith",
        "generate",
        "Explain how tides work",
        "--length",
        "lots",
    ]);

    let err = cli::handle_generate_command(&engine, &prompt, GenerateFlags::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Length must be a valid number");

    let flags = GenerateFlags {
        no_validate: true,
        ..GenerateFlags::default()
    };
    cli::handle_generate_command(&engine, &prompt, flags)?;
    Ok(())
}

#[test]
fn generate_surfaces_empty_input() {
    let engine = PromptEngine::new();
    let prompt = prompt_args(&["promptsmith", "generate", "   ", "--no-validate"]);
    let flags = GenerateFlags {
        no_validate: true,
        ..GenerateFlags::default()
    };
    let err = cli::handle_generate_command(&engine, &prompt, flags).unwrap_err();
    assert_eq!(err.to_string(), "Please provide a task description");
}

#[test]
fn stats_command_reads_a_file() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("prompt.md");
    fs::write(&path, "**Role:** expert. **Task:** write!")?;

    let stats = cli::handle_stats_command(&PromptEngine::new(), Some(&path), true)?;
    assert_eq!(stats.sections, 2);
    assert_eq!(stats.words, 4);
    Ok(())
}

#[test]
fn init_creates_a_loadable_config() -> Result<()> {
    let temp = TempDir::new()?;
    cli::handle_init_command(temp.path(), false)?;
    assert!(temp.path().join(files::CONFIG_FILE_NAME).exists());

    let manager = ConfigManager::load_from_workspace(temp.path())?;
    assert_eq!(manager.config().engine.default_category, "general");

    cli::handle_init_command(temp.path(), false)?;
    Ok(())
}

#[test]
fn categories_and_variations_run() -> Result<()> {
    let engine = PromptEngine::new().with_seed(2);
    cli::handle_categories_command(&engine, true)?;

    let prompt = prompt_args(&["promptsmith", "variations", "Plan a product launch event"]);
    cli::handle_variations_command(&engine, &prompt, 2, false)?;
    Ok(())
}
