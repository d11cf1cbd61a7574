use crate::cli::args::PromptArgs;
use anyhow::Result;
use console::style;
use promptsmith_core::PromptEngine;

/// Handle the validate command. Returns whether the input is valid.
pub fn handle_validate_command(engine: &PromptEngine, prompt: &PromptArgs) -> Result<bool> {
    let category = engine.resolve_category(prompt.category_key());
    let report = engine.validate_input(&prompt.task_text(), prompt.category_key(), &prompt.options());

    if report.is_valid {
        println!(
            "{} Task description is valid (category: {})",
            style("[OK]").green().bold(),
            style(category).cyan()
        );
        return Ok(true);
    }

    println!("{}", style("Validation failed").red().bold());
    for error in &report.errors {
        println!("  • {error}");
    }
    Ok(false)
}
