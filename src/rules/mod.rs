//! Rule model and loading.
//!
//! A rule is a guideline document scoped by glob patterns. Documents carry a
//! `---` fenced metadata header (description, globs, alwaysApply) followed by
//! a free-form markdown body. Rules are immutable once loaded; reloading means
//! rebuilding the store.

pub mod frontmatter;
pub mod store;

use std::path::PathBuf;

use serde::Serialize;

pub use frontmatter::{parse_document, Frontmatter};
pub use store::{LoadOutcome, RuleStore};

use crate::matcher::GlobSet;

/// A single guideline rule
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    /// Unique identifier, derived from the source file stem
    pub id: String,

    /// Glob expressions scoping this rule, as written in the header
    pub globs: Vec<String>,

    /// Free-text description, purely informational
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// If true, the rule applies to every file regardless of globs
    pub always_apply: bool,

    /// Guideline content
    #[serde(skip)]
    pub body: String,

    /// Source document path
    pub source: PathBuf,

    /// Compiled glob expressions (built once at load time)
    #[serde(skip)]
    pub(crate) glob_set: GlobSet,
}

impl Rule {
    /// One-line scope summary for listings
    pub fn scope_summary(&self) -> String {
        if self.always_apply {
            "always".to_string()
        } else if self.globs.is_empty() {
            "never (no globs)".to_string()
        } else {
            self.globs.join(", ")
        }
    }
}

/// A non-fatal problem encountered while loading a rule document.
///
/// Warnings are data, not errors: the offending document is skipped and the
/// load continues. Partial success is the normal outcome for a rules
/// directory with one bad file in it.
#[derive(Debug, Clone, Serialize)]
pub struct LoadWarning {
    /// Document that was skipped
    pub source: PathBuf,
    /// What went wrong
    pub kind: WarningKind,
    /// Human-readable detail
    pub message: String,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source.display(), self.message)
    }
}

/// Category of load warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// Metadata header missing or unterminated
    MissingFrontmatter,
    /// Metadata header present but unparseable
    MalformedFrontmatter,
    /// A glob expression failed to compile
    InvalidGlob,
    /// Another rule with the same id was already loaded
    DuplicateId,
    /// Document could not be read
    Unreadable,
}
