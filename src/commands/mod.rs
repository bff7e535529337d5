//! CLI command implementations.
//!
//! Each command is in its own submodule, taking an options struct and
//! returning `anyhow::Result`.

pub mod check;
pub mod compose;
pub mod init;
pub mod list;
pub mod matching;
pub mod show;
pub mod sync;

pub use check::{execute_check, CheckOptions};
pub use compose::{execute_compose, ComposeOptions};
pub use init::{execute_init, InitOptions};
pub use list::{execute_list, ListOptions};
pub use matching::{execute_match, MatchOptions};
pub use show::{execute_show, ShowOptions};
pub use sync::{execute_sync, SyncOptions};

use std::path::Path;

use console::style;

use crate::config::Config;
use crate::rules::{LoadOutcome, RuleStore};

/// Load the store for a command, printing any warnings to stderr.
pub(crate) fn load_store(root: &Path, config: &Config) -> crate::Result<RuleStore> {
    let LoadOutcome { store, warnings } = RuleStore::load_dir(root, config)?;
    for warning in &warnings {
        eprintln!("{} {}", style("!").yellow().bold(), warning);
    }
    Ok(store)
}
