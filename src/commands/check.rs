//! Check command - validate the rules directory.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::rules::{LoadOutcome, RuleStore};

/// Options for the check command
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Exit non-zero when any warning is produced
    pub strict: bool,
}

pub fn execute_check(config: &Config, options: CheckOptions) -> Result<()> {
    let LoadOutcome { store, warnings } = RuleStore::load_dir(Path::new("."), config)?;

    for warning in &warnings {
        println!("{} {}", style("!").yellow().bold(), warning);
    }

    println!(
        "\n{} rule{} loaded, {} warning{}",
        store.len(),
        if store.len() == 1 { "" } else { "s" },
        warnings.len(),
        if warnings.len() == 1 { "" } else { "s" }
    );

    if warnings.is_empty() {
        println!("{} All rule documents are valid", style("✓").green().bold());
    } else if options.strict {
        anyhow::bail!("{} warning(s) in strict mode", warnings.len());
    }

    Ok(())
}
