//! End-to-end tests: load a rules directory, match paths, compose payloads.

use std::path::Path;

use tempfile::TempDir;

use rulekit::{compose, Config, Matcher, OutputFormat, RuleStore, WarningKind};

const ANCHOR_RULE: &str = r#"---
description: Anchor program conventions
globs: programs/**/*.rs
alwaysApply: false
---
Keep one instruction handler per file under `handlers/`.
"#;

const TEST_RULE: &str = r#"---
description: Integration test conventions
globs: tests/**/*.ts, *.test.ts
alwaysApply: false
---
Use one `describe` block per instruction.
"#;

const GLOBAL_RULE: &str = r#"---
description: Project-wide conventions
alwaysApply: true
---
Prefer explicit error codes over panics.
"#;

const MALFORMED_RULE: &str = "just a plain markdown file, no header";

fn project_with_rules(docs: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let rules = temp.path().join(".rules");
    std::fs::create_dir(&rules).unwrap();
    for (name, content) in docs {
        std::fs::write(rules.join(name), content).unwrap();
    }
    temp
}

// =============================================================================
// Loading
// =============================================================================

mod loading_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_dir_skips_malformed_and_keeps_valid() {
        let temp = project_with_rules(&[
            ("anchor.mdc", ANCHOR_RULE),
            ("broken.mdc", MALFORMED_RULE),
            ("global.mdc", GLOBAL_RULE),
        ]);

        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();

        assert_eq!(outcome.store.len(), 2);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::MissingFrontmatter);
        assert!(outcome.store.get("anchor").is_some());
        assert!(outcome.store.get("global").is_some());
        assert!(outcome.store.get("broken").is_none());
    }

    #[test]
    fn test_load_order_follows_sorted_file_names() {
        let temp = project_with_rules(&[
            ("z-tests.mdc", TEST_RULE),
            ("a-anchor.mdc", ANCHOR_RULE),
        ]);

        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let ids: Vec<_> = outcome.store.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a-anchor", "z-tests"]);
    }

    #[test]
    fn test_custom_rules_dir_from_config() {
        let temp = TempDir::new().unwrap();
        let rules = temp.path().join("guidelines");
        std::fs::create_dir(&rules).unwrap();
        std::fs::write(rules.join("global.mdc"), GLOBAL_RULE).unwrap();

        let mut config = Config::default();
        config.rules_dir = Path::new("guidelines").to_path_buf();

        let outcome = RuleStore::load_dir(temp.path(), &config).unwrap();
        assert_eq!(outcome.store.len(), 1);
    }
}

// =============================================================================
// Matching
// =============================================================================

mod matching_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scoped_and_always_rules_for_program_file() {
        let temp = project_with_rules(&[
            ("anchor.mdc", ANCHOR_RULE),
            ("global.mdc", GLOBAL_RULE),
            ("tests.mdc", TEST_RULE),
        ]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);

        let matched = matcher.matches("programs/escrow/src/lib.rs");
        let ids: Vec<_> = matched.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["anchor", "global"]);
    }

    #[test]
    fn test_always_apply_matches_any_path() {
        let temp = project_with_rules(&[("global.mdc", GLOBAL_RULE)]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);

        assert_eq!(matcher.matches("anything/at/all.py").len(), 1);
        assert_eq!(matcher.matches("").len(), 1);
    }

    #[test]
    fn test_unmatched_path_yields_empty_result() {
        let temp = project_with_rules(&[("anchor.mdc", ANCHOR_RULE)]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);

        assert!(matcher.matches("docs/setup.md").is_empty());
    }

    #[test]
    fn test_matching_is_deterministic() {
        let temp = project_with_rules(&[
            ("anchor.mdc", ANCHOR_RULE),
            ("global.mdc", GLOBAL_RULE),
        ]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);

        let first: Vec<_> = matcher
            .matches("programs/x/src/lib.rs")
            .iter()
            .map(|r| r.id.clone())
            .collect();
        let second: Vec<_> = matcher
            .matches("programs/x/src/lib.rs")
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_comma_separated_globs_both_apply() {
        let temp = project_with_rules(&[("tests.mdc", TEST_RULE)]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);

        assert_eq!(matcher.matches("tests/escrow/deposit.ts").len(), 1);
        assert_eq!(matcher.matches("escrow.test.ts").len(), 1);
        assert!(matcher.matches("migrations/deploy.js").is_empty());
    }
}

// =============================================================================
// Composition
// =============================================================================

mod composition_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compose_markdown_payload_in_load_order() {
        let temp = project_with_rules(&[
            ("a-anchor.mdc", ANCHOR_RULE),
            ("b-global.mdc", GLOBAL_RULE),
        ]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);
        let matched = matcher.matches("programs/escrow/src/lib.rs");

        let config = Config::default();
        let payload = compose(&matched, OutputFormat::Markdown, &config.compose).unwrap();

        let anchor_pos = payload.find("Anchor program conventions").unwrap();
        let global_pos = payload.find("Project-wide conventions").unwrap();
        assert!(anchor_pos < global_pos);
        assert!(payload.contains("handlers/"));
        assert!(payload.contains("explicit error codes"));
    }

    #[test]
    fn test_compose_empty_match_is_empty_payload() {
        let temp = project_with_rules(&[("anchor.mdc", ANCHOR_RULE)]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);
        let matched = matcher.matches("docs/setup.md");

        let config = Config::default();
        let payload = compose(&matched, OutputFormat::Markdown, &config.compose).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_compose_json_reports_included_rules() {
        let temp = project_with_rules(&[("global.mdc", GLOBAL_RULE)]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);
        let matched = matcher.matches("src/lib.rs");

        let config = Config::default();
        let payload = compose(&matched, OutputFormat::Json, &config.compose).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(value["rules_included"], 1);
        assert_eq!(value["rules"][0]["id"], "global");
    }

    #[test]
    fn test_compose_is_idempotent_for_same_inputs() {
        let temp = project_with_rules(&[
            ("anchor.mdc", ANCHOR_RULE),
            ("global.mdc", GLOBAL_RULE),
        ]);
        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let matcher = Matcher::new(&outcome.store);
        let matched = matcher.matches("programs/x/src/lib.rs");

        let config = Config::default();
        let first = compose(&matched, OutputFormat::Markdown, &config.compose).unwrap();
        let second = compose(&matched, OutputFormat::Markdown, &config.compose).unwrap();
        assert_eq!(first, second);
    }
}
