//! Show command - print one rule in full.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::error::RulekitError;

/// Options for the show command
#[derive(Debug)]
pub struct ShowOptions {
    /// Rule identifier (file stem of the rule document)
    pub id: String,
    /// Emit machine-readable JSON
    pub json: bool,
}

pub fn execute_show(config: &Config, options: ShowOptions) -> Result<()> {
    let store = super::load_store(Path::new("."), config)?;

    let rule = store
        .get(&options.id)
        .ok_or_else(|| RulekitError::UnknownRule(options.id.clone()))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(rule)?);
        return Ok(());
    }

    println!("{}", style(&rule.id).cyan().bold());
    if let Some(desc) = &rule.description {
        println!("{}", style(desc).dim());
    }
    println!("source: {}", rule.source.display());
    println!("scope:  {}", rule.scope_summary());
    println!();
    println!("{}", rule.body);

    Ok(())
}
