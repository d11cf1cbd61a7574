//! Stats command implementation - show statistics for a prompt document

use anyhow::{Context, Result};
use console::style;
use promptsmith_core::{PromptEngine, PromptStats};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Handle the stats command
pub fn handle_stats_command(engine: &PromptEngine, file: Option<&Path>, json: bool) -> Result<PromptStats> {
    let document = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read document from stdin")?;
            buffer
        }
    };

    let stats = engine.get_stats(&document);
    if json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        println!("{json}");
    } else {
        print_stats_table(&stats);
    }

    Ok(stats)
}

pub fn print_stats_table(stats: &PromptStats) {
    println!("{}", style("Prompt Statistics").cyan().bold());
    println!("  Words: {}", style(stats.words).cyan());
    println!("  Characters: {}", style(stats.characters).cyan());
    println!("  Sentences: {}", style(stats.sentences).cyan());
    println!("  Sections: {}", style(stats.sections).cyan());
    println!(
        "  Estimated Reading Time: {} min",
        style(stats.estimated_reading_time).cyan()
    );
}
