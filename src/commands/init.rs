//! Init command - scaffold config and rules directory.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::{Config, CONFIG_FILE};

/// Starter rule written into a fresh rules directory
const STARTER_RULE: &str = include_str!("../../templates/starter.mdc");

/// Options for the init command
#[derive(Debug, Default)]
pub struct InitOptions {
    /// Overwrite an existing config
    pub force: bool,
    /// Rules directory override
    pub rules_dir: Option<PathBuf>,
}

pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);
    if config_path.exists() && !options.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut config = Config::default();
    if let Some(dir) = options.rules_dir {
        config.rules_dir = dir;
    }

    config.save(&config_path)?;
    println!(
        "{} Wrote {}",
        style("✓").green().bold(),
        config_path.display()
    );

    if !config.rules_dir.exists() {
        std::fs::create_dir_all(&config.rules_dir)?;
        let starter = config.rules_dir.join("conventions.mdc");
        std::fs::write(&starter, STARTER_RULE)?;
        println!(
            "{} Created {} with a starter rule",
            style("✓").green().bold(),
            config.rules_dir.display()
        );
    } else {
        println!(
            "{} Rules directory {} already exists, leaving it untouched",
            style("·").dim(),
            config.rules_dir.display()
        );
    }

    println!("\nNext steps:");
    println!("  - Edit rules under {}", config.rules_dir.display());
    println!("  - Run `rulekit check` to validate them");
    println!("  - Run `rulekit sync` to push guidance into your AI tools");

    Ok(())
}
