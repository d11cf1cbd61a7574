use crate::cli::args::PromptArgs;
use crate::cli::stats::print_stats_table;
use anyhow::{Context, Result, bail};
use promptsmith_core::PromptEngine;

/// Output switches for `generate`
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateFlags {
    pub json: bool,
    pub stats: bool,
    pub no_validate: bool,
}

/// Handle the generate command
pub fn handle_generate_command(
    engine: &PromptEngine,
    prompt: &PromptArgs,
    flags: GenerateFlags,
) -> Result<()> {
    let task = prompt.task_text();
    let options = prompt.options();

    if !flags.no_validate {
        let report = engine.validate_input(&task, prompt.category_key(), &options);
        if let Some(error) = report.first_error() {
            bail!("{error}");
        }
    }

    if flags.json {
        let record = engine.generate_record(&task, prompt.category_key(), &options)?;
        let json = serde_json::to_string_pretty(&record)
            .context("Failed to serialize generation record")?;
        println!("{json}");
        return Ok(());
    }

    let document = engine.generate(&task, prompt.category_key(), &options)?;
    println!("{document}");

    if flags.stats {
        println!();
        print_stats_table(&engine.get_stats(&document));
    }

    Ok(())
}
