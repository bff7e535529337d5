//! Rule file content generation shared by all adapters.

use crate::compose::{compose, OutputFormat};
use crate::config::ComposeConfig;
use crate::error::Result;
use crate::rules::{Rule, RuleStore};
use crate::sync::tool::Tool;

/// Generate the markdown payload written into a tool's rule file.
///
/// Always-apply rules are included verbatim; glob-scoped rules are listed as
/// an index so the assistant knows which document to consult when touching
/// matching files. The scoped bodies themselves stay in the rules directory -
/// inlining all of them would defeat the point of scoping.
pub fn generate_tool_markdown(
    tool: Tool,
    store: &RuleStore,
    compose_config: &ComposeConfig,
) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "# Project Rules ({})\n\nThis section is generated by rulekit from the rules directory. Run `rulekit sync` after editing rules.\n",
        tool.name()
    ));

    let always: Vec<&Rule> = store.all().iter().filter(|r| r.always_apply).collect();
    if !always.is_empty() {
        out.push_str("\n## Always-applied guidance\n\n");
        let payload = compose(&always, OutputFormat::Text, compose_config)?;
        out.push_str(&payload);
        out.push('\n');
    }

    let scoped: Vec<&Rule> = store
        .all()
        .iter()
        .filter(|r| !r.always_apply && !r.globs.is_empty())
        .collect();
    if !scoped.is_empty() {
        out.push_str("\n## Scoped rules\n\nConsult the named rule document before editing matching files:\n\n");
        for rule in scoped {
            let desc = rule
                .description
                .as_deref()
                .map(|d| format!(" - {}", d))
                .unwrap_or_default();
            out.push_str(&format!(
                "- `{}` (files: {}){}\n",
                rule.source.display(),
                rule.globs.join(", "),
                desc
            ));
        }
    }

    if store.is_empty() {
        out.push_str("\nNo rules loaded yet. Add rule documents to the rules directory.\n");
    }

    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RuleStore {
        RuleStore::load_documents(vec![
            (
                "global.mdc",
                "---\ndescription: Global style\nalwaysApply: true\n---\nPrefer @solana/kit over web3.js.\n",
            ),
            (
                "anchor.mdc",
                "---\ndescription: Anchor layout\nglobs: programs/**/*.rs\nalwaysApply: false\n---\nUse handlers/, not instructions/.\n",
            ),
        ])
        .store
    }

    #[test]
    fn test_always_rules_inlined() {
        let content =
            generate_tool_markdown(Tool::Cursor, &store(), &ComposeConfig::default()).unwrap();
        assert!(content.contains("Prefer @solana/kit over web3.js."));
        // Scoped bodies are indexed, not inlined
        assert!(!content.contains("Use handlers/, not instructions/."));
        assert!(content.contains("programs/**/*.rs"));
        assert!(content.contains("anchor.mdc"));
    }

    #[test]
    fn test_empty_store_placeholder() {
        let empty = RuleStore::load_documents(Vec::<(&str, &str)>::new()).store;
        let content =
            generate_tool_markdown(Tool::Generic, &empty, &ComposeConfig::default()).unwrap();
        assert!(content.contains("No rules loaded yet"));
    }
}
