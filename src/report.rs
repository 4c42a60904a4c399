use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::ParsedConfig;

/// Render the resolved configuration as pretty-printed JSON
pub fn render_json(config: &ParsedConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(json)
}

/// Render the resolved configuration to the terminal with colors
pub fn render_terminal(config: &ParsedConfig) {
    println!();
    println!("  {}", "Resolved configuration".bold());
    println!();

    if let Some(ref filepath) = config.filepath {
        println!("  {:<24} {}", "entry file".dimmed(), filepath);
    }
    if let Some(ref repos) = config.git_repos {
        println!("  {:<24} {}", "git repos".dimmed(), repos);
    }
    if let Some(ref root) = config.root_directory {
        println!("  {:<24} {}", "project root".dimmed(), root);
    }
    println!("  {:<24} {}", "adaptor".dimmed(), config.adaptor_name());
    if let Some(ref baseline) = config.baseline {
        println!("  {:<24} {}", "baseline".dimmed(), baseline);
    }
    println!(
        "  {:<24} {}",
        "blackbox mapping".dimmed(),
        config.blackbox_mapping_file.display()
    );
    println!(
        "  {:<24} {}",
        "trigger words".dimmed(),
        config.trigger_word_file.display()
    );
    println!(
        "  {:<24} {}",
        "print mode".dimmed(),
        if config.interactive() {
            "interactive"
        } else {
            "trim reassigned"
        }
    );
    println!();
}
