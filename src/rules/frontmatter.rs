//! Frontmatter parsing for rule documents.
//!
//! Documents begin with a `---` fenced header:
//!
//! ```text
//! ---
//! description: Anchor program conventions
//! globs: programs/**/*.rs, Anchor.toml
//! alwaysApply: false
//! ---
//! body...
//! ```
//!
//! Real-world headers are frequently not valid YAML (unquoted comma-separated
//! glob lists with `*` at the start of a scalar), so parsing is two-stage:
//! strict serde_yaml first, then a line-based fallback that extracts the three
//! recognized keys.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Matches `key: value` header lines in the fallback parser
static KEY_VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*):\s*(.*)$").unwrap());

/// Matches YAML list items (`- pattern`) in the fallback parser
static LIST_ITEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+-\s+(.+)$").unwrap());

/// Parsed metadata header of a rule document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub description: Option<String>,
    pub globs: Vec<String>,
    pub always_apply: bool,
}

/// Errors local to document parsing. These become [`crate::rules::LoadWarning`]s
/// in the store; they are never fatal to a directory load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Document does not start with a `---` fence
    MissingHeader,
    /// Opening fence without a closing fence
    UnterminatedHeader,
    /// Header present but neither parser could read it
    MalformedHeader(String),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::MissingHeader => write!(f, "no metadata header (`---` fence)"),
            DocumentError::UnterminatedHeader => write!(f, "unterminated metadata header"),
            DocumentError::MalformedHeader(msg) => write!(f, "malformed metadata header: {}", msg),
        }
    }
}

/// Strict YAML shape of the header. `globs` accepts either a sequence or a
/// single (possibly comma-separated) string.
#[derive(Debug, Deserialize)]
struct RawFrontmatter {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    globs: Option<GlobsField>,
    #[serde(default, rename = "alwaysApply")]
    always_apply: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GlobsField {
    One(String),
    Many(Vec<String>),
}

/// Split a document into (frontmatter, body).
pub fn parse_document(content: &str) -> Result<(Frontmatter, String), DocumentError> {
    let (header, body) = split_fences(content)?;
    let meta = parse_header(&header)?;
    Ok((meta, body))
}

/// Extract the fenced header block and the remaining body
fn split_fences(content: &str) -> Result<(String, String), DocumentError> {
    let mut lines = content.lines();
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return Err(DocumentError::MissingHeader),
    }

    let mut header_lines = Vec::new();
    for line in lines.by_ref() {
        if line.trim_end() == "---" {
            let body: String = lines.collect::<Vec<_>>().join("\n");
            return Ok((header_lines.join("\n"), body.trim_start().to_string()));
        }
        header_lines.push(line);
    }

    Err(DocumentError::UnterminatedHeader)
}

/// Parse the header block: strict YAML, then tolerant line fallback
fn parse_header(header: &str) -> Result<Frontmatter, DocumentError> {
    if let Ok(raw) = serde_yaml::from_str::<RawFrontmatter>(header) {
        return Ok(Frontmatter {
            description: raw.description.filter(|d| !d.trim().is_empty()),
            globs: match raw.globs {
                Some(GlobsField::One(s)) => split_globs(&s),
                Some(GlobsField::Many(v)) => v
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                None => Vec::new(),
            },
            always_apply: raw.always_apply.unwrap_or(false),
        });
    }

    parse_header_fallback(header)
}

/// Line-based fallback for headers that are not valid YAML
fn parse_header_fallback(header: &str) -> Result<Frontmatter, DocumentError> {
    let mut meta = Frontmatter::default();
    let mut recognized = 0usize;
    let mut in_globs_list = false;

    for line in header.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if in_globs_list {
            if let Some(cap) = LIST_ITEM_PATTERN.captures(line) {
                meta.globs.push(cap[1].trim().to_string());
                continue;
            }
            in_globs_list = false;
        }

        let Some(cap) = KEY_VALUE_PATTERN.captures(line) else {
            return Err(DocumentError::MalformedHeader(format!(
                "unreadable line: `{}`",
                line.trim()
            )));
        };

        let key = &cap[1];
        let value = cap[2].trim();
        match key {
            "description" => {
                if !value.is_empty() {
                    meta.description = Some(value.trim_matches('"').to_string());
                }
                recognized += 1;
            }
            "globs" => {
                if value.is_empty() {
                    // YAML-style list on the following lines
                    in_globs_list = true;
                } else {
                    meta.globs = split_globs(value);
                }
                recognized += 1;
            }
            "alwaysApply" => {
                meta.always_apply = match value {
                    "true" => true,
                    "false" | "" => false,
                    other => {
                        return Err(DocumentError::MalformedHeader(format!(
                            "alwaysApply must be true or false, got `{}`",
                            other
                        )))
                    }
                };
                recognized += 1;
            }
            // Unknown keys are ignored, matching the strict parser
            _ => {}
        }
    }

    if recognized == 0 {
        return Err(DocumentError::MalformedHeader(
            "no recognized keys (description, globs, alwaysApply)".to_string(),
        ));
    }

    Ok(meta)
}

/// Split a comma-separated glob list, respecting `{a,b}` alternation groups.
///
/// `programs/**/*.rs, {tests,migrations}/**/*.ts` splits into two expressions,
/// not three.
pub fn split_globs(value: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for ch in value.chars() {
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
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.trim_matches('"').to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.trim_matches('"').to_string());
    }

    out
}
