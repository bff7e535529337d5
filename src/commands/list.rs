//! List command - show all loaded rules.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the list command
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Emit machine-readable JSON instead of the table
    pub json: bool,
}

pub fn execute_list(config: &Config, options: ListOptions) -> Result<()> {
    let store = super::load_store(Path::new("."), config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(store.all())?);
        return Ok(());
    }

    if store.is_empty() {
        println!(
            "No rules found in {} (run `rulekit init` to scaffold one)",
            config.rules_dir.display()
        );
        return Ok(());
    }

    println!(
        "{} ({} rule{})\n",
        style("Rules").bold(),
        store.len(),
        if store.len() == 1 { "" } else { "s" }
    );

    for rule in store.all() {
        let desc = rule.description.as_deref().unwrap_or("(no description)");
        println!(
            "  {} {}",
            style(&rule.id).cyan().bold(),
            style(desc).dim()
        );
        println!("    scope: {}", rule.scope_summary());
    }

    Ok(())
}
