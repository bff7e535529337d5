//! Integration tests for syncing rules into AI tool config files.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use rulekit::{BootstrapAction, ComposeConfig, RuleStore, SyncExecutor, Tool};

const GLOBAL_RULE: &str = r#"---
description: Project-wide conventions
alwaysApply: true
---
Prefer explicit error codes over panics.
"#;

const SCOPED_RULE: &str = r#"---
description: Anchor program conventions
globs: programs/**/*.rs
alwaysApply: false
---
Keep one instruction handler per file.
"#;

fn store() -> RuleStore {
    RuleStore::load_documents(vec![
        (".rules/anchor.mdc", SCOPED_RULE),
        (".rules/global.mdc", GLOBAL_RULE),
    ])
    .store
}

#[test]
fn test_bootstrap_all_creates_generic_fallback() {
    let temp = TempDir::new().unwrap();
    let executor = SyncExecutor::new();

    let results = executor.bootstrap_all(temp.path(), &store(), &ComposeConfig::default());
    let results: Vec<_> = results.into_iter().map(|r| r.unwrap()).collect();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tool, Tool::Generic);
    assert!(temp.path().join("AGENTS.md").exists());
}

#[test]
fn test_generated_file_inlines_always_rules_and_indexes_scoped() {
    let temp = TempDir::new().unwrap();
    let executor = SyncExecutor::new();

    executor
        .bootstrap_tool(Tool::ClaudeCode, temp.path(), &store(), &ComposeConfig::default())
        .unwrap();

    let content = std::fs::read_to_string(temp.path().join("CLAUDE.md")).unwrap();
    // always-apply body is inlined
    assert!(content.contains("Prefer explicit error codes over panics."));
    // scoped rule is indexed by source and globs, not inlined
    assert!(content.contains(".rules/anchor.mdc"));
    assert!(content.contains("programs/**/*.rs"));
    assert!(!content.contains("Keep one instruction handler per file."));
}

#[test]
fn test_sync_preserves_user_content_outside_markers() {
    let temp = TempDir::new().unwrap();
    let user_notes = "# My Project\n\nHand-written notes that must survive.\n";
    std::fs::write(temp.path().join("CLAUDE.md"), user_notes).unwrap();

    let executor = SyncExecutor::new();
    let result = executor
        .bootstrap_tool(Tool::ClaudeCode, temp.path(), &store(), &ComposeConfig::default())
        .unwrap();
    assert_eq!(result.action, BootstrapAction::Merged);

    let content = std::fs::read_to_string(temp.path().join("CLAUDE.md")).unwrap();
    assert!(content.contains("Hand-written notes that must survive."));
    assert!(content.contains("Prefer explicit error codes over panics."));
}

#[test]
fn test_sync_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let executor = SyncExecutor::new();
    let compose = ComposeConfig::default();

    executor
        .bootstrap_tool(Tool::Cursor, temp.path(), &store(), &compose)
        .unwrap();
    let first = std::fs::read_to_string(temp.path().join(".cursorrules")).unwrap();

    executor
        .bootstrap_tool(Tool::Cursor, temp.path(), &store(), &compose)
        .unwrap();
    let second = std::fs::read_to_string(temp.path().join(".cursorrules")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_copilot_output_creates_parent_directory() {
    let temp = TempDir::new().unwrap();
    let executor = SyncExecutor::new();

    let result = executor
        .bootstrap_tool(Tool::Copilot, temp.path(), &store(), &ComposeConfig::default())
        .unwrap();

    assert_eq!(result.action, BootstrapAction::Created);
    assert!(temp
        .path()
        .join(".github/copilot-instructions.md")
        .exists());
}
