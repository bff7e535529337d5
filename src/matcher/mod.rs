//! Glob matching for rule scopes.
//!
//! Semantics:
//! - `*` matches within a single path component, `**` crosses separators
//!   (`require_literal_separator` is on).
//! - Patterns containing no `/` are additionally matched against the path's
//!   final component, gitignore-style, so `*.rs` applies to
//!   `handlers/initialize.rs`.
//! - `{a,b}` alternation is brace-expanded into multiple patterns before
//!   compilation; the `glob` crate itself has no brace syntax.
//! - Matching is case-sensitive against repository-root-relative paths.

use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::error::{Result, RulekitError};
use crate::rules::{Rule, RuleStore};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A set of compiled glob expressions belonging to one rule
#[derive(Debug, Clone, Default)]
pub struct GlobSet {
    exprs: Vec<CompiledGlob>,
}

#[derive(Debug, Clone)]
struct CompiledGlob {
    pattern: Pattern,
    /// Pattern had no `/`: also try the path's final component
    basename: bool,
}

impl GlobSet {
    /// Compile raw glob expressions, expanding alternation groups.
    ///
    /// Fails on the first unrecoverable pattern; the store turns that into a
    /// per-document warning.
    pub fn compile(raw: &[String]) -> Result<Self> {
        let mut exprs = Vec::new();

        for expr in raw {
            for expanded in expand_braces(expr) {
                let pattern =
                    Pattern::new(&expanded).map_err(|source| RulekitError::InvalidPattern {
                        pattern: expr.clone(),
                        source,
                    })?;
                exprs.push(CompiledGlob {
                    pattern,
                    basename: !expanded.contains('/'),
                });
            }
        }

        Ok(Self { exprs })
    }

    /// True if the set has no expressions
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Test a root-relative path against every expression
    pub fn matches(&self, path: &str) -> bool {
        let normalized = path.strip_prefix("./").unwrap_or(path);
        let file_name = Path::new(normalized)
            .file_name()
            .map(|n| n.to_string_lossy());

        self.exprs.iter().any(|expr| {
            if expr.pattern.matches_with(normalized, MATCH_OPTIONS) {
                return true;
            }
            if expr.basename {
                if let Some(ref name) = file_name {
                    return expr.pattern.matches_with(name, MATCH_OPTIONS);
                }
            }
            false
        })
    }
}

/// Expand `{a,b}` alternation groups into plain glob expressions.
///
/// Expands the first (outermost) group and recurses, so nested groups work:
/// `a/{b,{c,d}}/e` yields three patterns. Input without braces passes
/// through unchanged. An unmatched `{` is left literal - Pattern compilation
/// decides whether the remainder is valid.
pub fn expand_braces(expr: &str) -> Vec<String> {
    let Some(open) = expr.find('{') else {
        return vec![expr.to_string()];
    };

    // Find the matching close brace for the first open
    let mut depth = 0usize;
    let mut close = None;
    for (i, ch) in expr.char_indices().skip(open) {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }

    let Some(close) = close else {
        return vec![expr.to_string()];
    };

    let prefix = &expr[..open];
    let group = &expr[open + 1..close];
    let suffix = &expr[close + 1..];

    // Split alternatives at depth zero only
    let mut alternatives = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for ch in group.chars() {
        match ch {
            '{' => {
                depth += 1;
                current.push(ch);
            }
            '}' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                alternatives.push(current.clone());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    alternatives.push(current);

    let mut out = Vec::new();
    for alt in alternatives {
        let candidate = format!("{}{}{}", prefix, alt, suffix);
        out.extend(expand_braces(&candidate));
    }
    out
}

/// Determines which rules apply to a given file path.
///
/// Pure and stateless: the store is read-only and matching has no side
/// effects, so repeated calls with the same inputs yield identical results.
pub struct Matcher<'a> {
    store: &'a RuleStore,
}

impl<'a> Matcher<'a> {
    pub fn new(store: &'a RuleStore) -> Self {
        Self { store }
    }

    /// Return the applicable rules for `path`, in store load order.
    ///
    /// A rule applies if `always_apply` is set, or if any of its glob
    /// expressions matches the root-relative path. No match is a normal,
    /// empty result.
    pub fn matches(&self, path: &str) -> Vec<&'a Rule> {
        self.store
            .all()
            .iter()
            .filter(|rule| rule.always_apply || rule.glob_set.matches(path))
            .collect()
    }
}
