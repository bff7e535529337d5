//! Compose command - build the guidance payload for a file path.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;

use crate::compose::{compose, OutputFormat};
use crate::config::Config;
use crate::matcher::Matcher;

/// Options for the compose command
#[derive(Debug)]
pub struct ComposeOptions {
    /// Project-relative file path to compose guidance for
    pub path: String,
    /// Output format: markdown, text, or json
    pub format: OutputFormat,
    /// Write the payload to a file instead of stdout
    pub output: Option<PathBuf>,
}

pub fn execute_compose(config: &Config, options: ComposeOptions) -> Result<()> {
    let store = super::load_store(Path::new("."), config)?;
    let matcher = Matcher::new(&store);
    let matched = matcher.matches(&options.path);

    let payload = compose(&matched, options.format, &config.compose)?;

    match options.output {
        Some(path) => {
            std::fs::write(&path, &payload)?;
            eprintln!(
                "{} Wrote {} ({} rule{})",
                style("✓").green().bold(),
                path.display(),
                matched.len(),
                if matched.len() == 1 { "" } else { "s" }
            );
        }
        None => {
            if payload.is_empty() {
                eprintln!("No guidance for {}", style(&options.path).bold());
            } else {
                println!("{}", payload);
            }
        }
    }

    Ok(())
}
