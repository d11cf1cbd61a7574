use anyhow::{Context, Result};
use console::style;
use promptsmith_core::PromptSmithConfig;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!("{}", style("Initialize PromptSmith configuration").blue().bold());
    println!("Workspace: {}", workspace.display());

    let created = PromptSmithConfig::bootstrap_project(workspace, force)
        .with_context(|| "failed to initialize configuration files")?;

    if created.is_empty() {
        println!(
            "{} Configuration already exists; use --force to overwrite",
            style("[SKIP]").yellow()
        );
    } else {
        for file in created {
            println!("{} Created {file}", style("[OK]").green().bold());
        }
    }

    Ok(())
}
