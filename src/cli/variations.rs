use crate::cli::args::PromptArgs;
use anyhow::{Context, Result, bail};
use console::style;
use promptsmith_core::PromptEngine;

/// Handle the variations command
pub fn handle_variations_command(
    engine: &PromptEngine,
    prompt: &PromptArgs,
    count: usize,
    json: bool,
) -> Result<()> {
    let task = prompt.task_text();
    let options = prompt.options();

    let report = engine.validate_input(&task, prompt.category_key(), &options);
    if let Some(error) = report.first_error() {
        bail!("{error}");
    }

    let batch = engine.generate_variations(&task, prompt.category_key(), &options, count)?;

    if json {
        let json =
            serde_json::to_string_pretty(&batch).context("Failed to serialize variations")?;
        println!("{json}");
        return Ok(());
    }

    for variation in &batch {
        println!(
            "{} {}",
            style(format!("Variation {}", variation.id)).cyan().bold(),
            style(format!("({})", variation.style)).dim()
        );
        println!("{}\n", variation.prompt);
    }

    Ok(())
}
