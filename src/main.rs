use anyhow::{Context, Result};
use clap::Parser;
use promptsmith::cli::{self, Cli, Commands, GenerateFlags};
use promptsmith_core::{ConfigManager, PromptEngine};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let workspace = match args.workspace.clone() {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine current dir")?,
    };

    let manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(&workspace)?,
    };
    init_tracing(args.log_level.as_deref(), &manager.config().logging.level);

    if let Some(path) = manager.config_path() {
        tracing::debug!(target = "config", path = %path.display(), "using config file");
    }

    let engine = PromptEngine::from_config(manager.config());

    match args.command {
        Commands::Generate {
            prompt,
            seed,
            json,
            stats,
            no_validate,
        } => {
            let engine = with_seed(engine, seed);
            let flags = GenerateFlags {
                json,
                stats,
                no_validate,
            };
            cli::handle_generate_command(&engine, &prompt, flags)?;
        }
        Commands::Validate { prompt } => {
            if !cli::handle_validate_command(&engine, &prompt)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Stats { file, json } => {
            cli::handle_stats_command(&engine, file.as_deref(), json)?;
        }
        Commands::Categories { verbose } => {
            cli::handle_categories_command(&engine, verbose)?;
        }
        Commands::Variations {
            prompt,
            count,
            seed,
            json,
        } => {
            let engine = with_seed(engine, seed);
            cli::handle_variations_command(&engine, &prompt, count, json)?;
        }
        Commands::Init { force } => {
            cli::handle_init_command(&workspace, force)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn with_seed(engine: PromptEngine, seed: Option<u64>) -> PromptEngine {
    match seed {
        Some(seed) => engine.with_seed(seed),
        None => engine,
    }
}

/// Log to stderr. `RUST_LOG` wins over `--log-level`, which wins over the
/// `[logging]` table.
fn init_tracing(cli_level: Option<&str>, config_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli_level.unwrap_or(config_level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
