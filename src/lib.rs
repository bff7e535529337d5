#![forbid(unsafe_code)]

//! # rulekit
//!
//! Glob-scoped guidance rules for AI coding assistants.
//!
//! Rule documents are Markdown files with a YAML frontmatter header that
//! declares a description, a set of glob expressions, and an always-apply
//! flag. rulekit loads them, matches file paths against their globs, and
//! composes the matching guidance into a single payload.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use rulekit::{compose, Config, Matcher, OutputFormat, RuleStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let outcome = RuleStore::load_dir(Path::new("."), &config)?;
//!
//!     let matcher = Matcher::new(&outcome.store);
//!     let rules = matcher.matches("programs/vault/src/lib.rs");
//!
//!     let payload = compose(&rules, OutputFormat::Markdown, &config.compose)?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod compose;
pub mod config;
pub mod error;
pub mod matcher;
pub mod rules;
pub mod sync;

// Re-exports
pub use compose::{compose, OutputFormat};
pub use config::{ComposeConfig, Config};
pub use error::{Result, RulekitError};
pub use matcher::{GlobSet, Matcher};
pub use rules::{LoadOutcome, LoadWarning, Rule, RuleStore, WarningKind};
pub use sync::{BootstrapAction, BootstrapResult, SyncExecutor, Tool};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
