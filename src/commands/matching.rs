//! Match command - list the rules that apply to a file path.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::matcher::Matcher;

/// Options for the match command
#[derive(Debug)]
pub struct MatchOptions {
    /// Project-relative file path to match against
    pub path: String,
    /// Emit machine-readable JSON
    pub json: bool,
}

pub fn execute_match(config: &Config, options: MatchOptions) -> Result<()> {
    let store = super::load_store(Path::new("."), config)?;
    let matcher = Matcher::new(&store);
    let matched = matcher.matches(&options.path);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    if matched.is_empty() {
        println!("No rules match {}", style(&options.path).bold());
        return Ok(());
    }

    println!(
        "{} rule{} match {}\n",
        matched.len(),
        if matched.len() == 1 { "" } else { "s" },
        style(&options.path).bold()
    );

    for rule in matched {
        let desc = rule.description.as_deref().unwrap_or("(no description)");
        println!("  {} {}", style(&rule.id).cyan().bold(), style(desc).dim());
    }

    Ok(())
}
