use anyhow::Result;
use console::style;
use promptsmith_core::prompts::catalog::{format_keys, tone_keys};
use promptsmith_core::{Category, PromptEngine};

/// Handle the categories command
pub fn handle_categories_command(engine: &PromptEngine, verbose: bool) -> Result<()> {
    println!("{}", style("Prompt Categories").cyan().bold());

    for key in engine.list_categories() {
        let Some(category) = Category::lookup(key) else {
            continue;
        };
        let marker = if category == engine.default_category() {
            style(" (default)").dim().to_string()
        } else {
            String::new()
        };
        println!("  • {}{marker}", style(key).yellow());

        if verbose {
            let template = category.template();
            let techniques: Vec<&str> = template.techniques.iter().map(|t| t.key()).collect();
            println!("      Structure: {}", template.structure.join(" → "));
            println!("      Role prompts: {}", template.role_prompts.len());
            println!("      Techniques: {}", techniques.join(", "));
        }
    }

    if verbose {
        for line in vocabulary_lines() {
            println!("{line}");
        }
    }

    Ok(())
}

/// Tone and format keys that map to dedicated guidance sentences
fn vocabulary_lines() -> [String; 2] {
    [
        format!("Tones: {}", tone_keys().collect::<Vec<_>>().join(", ")),
        format!("Formats: {}", format_keys().collect::<Vec<_>>().join(", ")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_lists_known_tones_and_formats() {
        let [tones, formats] = vocabulary_lines();
        assert!(tones.starts_with("Tones: professional"));
        assert!(tones.contains("technical"));
        assert!(formats.starts_with("Formats: "));
        assert!(formats.contains("blog post"));
    }
}
