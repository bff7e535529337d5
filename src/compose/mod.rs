//! Guidance payload composition.
//!
//! Concatenates matched rule bodies in load order, separated by a clear
//! delimiter. Overlapping or contradictory advice is passed through verbatim;
//! resolving conflicts is the consumer's job, not this module's.

use serde::Serialize;

use crate::config::ComposeConfig;
use crate::error::{Result, RulekitError};
use crate::rules::Rule;

/// Output format for composed payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = RulekitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(RulekitError::Other(format!("unknown output format: {}", s))),
        }
    }
}

/// Compose a single guidance payload from matched rules.
///
/// Bodies appear in the order the rules were loaded. No de-duplication is
/// performed; a rule repeated in two scopes appears once per rule, and later
/// rules may restate or contradict earlier ones.
pub fn compose(rules: &[&Rule], format: OutputFormat, config: &ComposeConfig) -> Result<String> {
    if format == OutputFormat::Json {
        return compose_json(rules);
    }

    let mut blocks: Vec<String> = Vec::with_capacity(rules.len());
    for rule in rules {
        let body = rule.body.trim();
        if body.is_empty() {
            continue;
        }
        if config.headers && format == OutputFormat::Markdown {
            let title = rule.description.as_deref().unwrap_or(&rule.id);
            blocks.push(format!("## {}\n\n{}", title, body));
        } else {
            blocks.push(body.to_string());
        }
    }

    let delimiter = format!("\n\n{}\n\n", config.delimiter.trim());
    Ok(blocks.join(&delimiter))
}

fn compose_json(rules: &[&Rule]) -> Result<String> {
    #[derive(Serialize)]
    struct JsonOutput<'a> {
        rules_included: usize,
        rules: Vec<JsonRule<'a>>,
    }

    #[derive(Serialize)]
    struct JsonRule<'a> {
        id: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<&'a str>,
        always_apply: bool,
        globs: &'a [String],
        body: &'a str,
    }

    let output = JsonOutput {
        rules_included: rules.len(),
        rules: rules
            .iter()
            .map(|r| JsonRule {
                id: &r.id,
                description: r.description.as_deref(),
                always_apply: r.always_apply,
                globs: &r.globs,
                body: &r.body,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&output)?)
}
