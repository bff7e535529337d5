//! Sync command - write rule files for detected AI tools.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::error::RulekitError;
use crate::sync::{BootstrapAction, SyncExecutor, Tool};

/// Options for the sync command
#[derive(Debug, Default)]
pub struct SyncOptions {
    /// Sync only the named tools instead of auto-detecting
    pub tools: Vec<String>,
    /// Sync every supported tool regardless of detection
    pub all: bool,
}

pub fn execute_sync(config: &Config, options: SyncOptions) -> Result<()> {
    let root = Path::new(".");
    let store = super::load_store(root, config)?;
    let executor = SyncExecutor::new();

    let results = if options.all {
        Tool::all()
            .iter()
            .map(|tool| executor.bootstrap_tool(*tool, root, &store, &config.compose))
            .collect()
    } else if !options.tools.is_empty() {
        let mut results = Vec::new();
        for name in &options.tools {
            let tool = Tool::from_name(name)
                .ok_or_else(|| RulekitError::UnknownTool(name.clone()))?;
            results.push(executor.bootstrap_tool(tool, root, &store, &config.compose));
        }
        results
    } else {
        executor.bootstrap_all(root, &store, &config.compose)
    };

    let mut failures = 0;
    for result in results {
        match result {
            Ok(outcome) => {
                let verb = match outcome.action {
                    BootstrapAction::Created => "created",
                    BootstrapAction::Merged => "updated",
                };
                println!(
                    "{} {} {} ({})",
                    style("✓").green().bold(),
                    verb,
                    outcome.output_path.display(),
                    outcome.tool
                );
            }
            Err(err) => {
                failures += 1;
                eprintln!("{} {}", style("✗").red().bold(), err);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} tool(s) failed to sync", failures);
    }

    Ok(())
}
