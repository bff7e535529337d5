//! Immutable rule store and directory loading.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, RulekitError};
use crate::matcher::GlobSet;
use crate::rules::frontmatter::{parse_document, DocumentError};
use crate::rules::{LoadWarning, Rule, WarningKind};

/// Result of loading rule documents: the usable store plus the warnings for
/// every document that had to be skipped. Partial success is the normal shape
/// of this result, not an exception path.
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: RuleStore,
    pub warnings: Vec<LoadWarning>,
}

/// The immutable, in-memory collection of loaded rules.
///
/// Contents are fixed for the lifetime of the store; reload requires
/// re-construction. No interior mutability, so shared references are safe to
/// read from concurrently.
#[derive(Debug, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    /// Build a store from in-memory documents (`(source, content)` pairs).
    ///
    /// Documents are processed in iteration order; that order is what `all()`
    /// and composition preserve. Malformed documents are skipped with a
    /// warning. A duplicate id replaces the earlier rule in place (keeping its
    /// position), with a warning naming the shadowed source - user-level rules
    /// load first, so a project rule overrides a same-named user rule.
    pub fn load_documents<I, P, S>(docs: I) -> LoadOutcome
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        let mut rules: Vec<Rule> = Vec::new();
        let mut warnings = Vec::new();
        let mut index_by_id: HashMap<String, usize> = HashMap::new();

        for (source, content) in docs {
            let source = source.into();
            match build_rule(&source, content.as_ref()) {
                Ok(rule) => {
                    if let Some(&i) = index_by_id.get(&rule.id) {
                        let warning = LoadWarning {
                            source: rule.source.clone(),
                            kind: WarningKind::DuplicateId,
                            message: format!(
                                "duplicate rule id `{}` overrides earlier definition from {}",
                                rule.id,
                                rules[i].source.display()
                            ),
                        };
                        tracing::warn!("{}", warning);
                        warnings.push(warning);
                        rules[i] = rule;
                    } else {
                        index_by_id.insert(rule.id.clone(), rules.len());
                        rules.push(rule);
                    }
                }
                Err(warning) => {
                    tracing::warn!("skipping rule document {}", warning);
                    warnings.push(warning);
                }
            }
        }

        LoadOutcome {
            store: RuleStore { rules },
            warnings,
        }
    }

    /// Load every rule document under the configured directories.
    ///
    /// User-level rules (if enabled) load before project rules; within a
    /// directory, documents load in sorted path order. The project rules
    /// directory must exist; a missing user directory is silently skipped.
    pub fn load_dir(root: &Path, config: &Config) -> Result<LoadOutcome> {
        let rules_dir = root.join(&config.rules_dir);
        if !rules_dir.is_dir() {
            return Err(RulekitError::RulesDirNotFound(rules_dir));
        }

        let mut sources: Vec<PathBuf> = Vec::new();
        if let Some(user_dir) = config.user_rules_dir() {
            if user_dir.is_dir() {
                sources.extend(find_documents(&user_dir, config));
            }
        }
        sources.extend(find_documents(&rules_dir, config));

        let mut docs: Vec<(PathBuf, String)> = Vec::new();
        let mut unreadable: Vec<LoadWarning> = Vec::new();
        for path in sources {
            match std::fs::read_to_string(&path) {
                Ok(content) => docs.push((path, content)),
                Err(e) => unreadable.push(LoadWarning {
                    source: path,
                    kind: WarningKind::Unreadable,
                    message: e.to_string(),
                }),
            }
        }

        let mut outcome = Self::load_documents(docs);
        outcome.warnings.extend(unreadable);
        Ok(outcome)
    }

    /// All rules, in load order (stable, deterministic)
    pub fn all(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by id
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Number of loaded rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are loaded
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse one document into a rule, or explain why it was skipped
fn build_rule(source: &Path, content: &str) -> std::result::Result<Rule, LoadWarning> {
    let warn = |kind: WarningKind, message: String| LoadWarning {
        source: source.to_path_buf(),
        kind,
        message,
    };

    let (meta, body) = parse_document(content).map_err(|e| {
        let kind = match e {
            DocumentError::MissingHeader | DocumentError::UnterminatedHeader => {
                WarningKind::MissingFrontmatter
            }
            DocumentError::MalformedHeader(_) => WarningKind::MalformedFrontmatter,
        };
        warn(kind, e.to_string())
    })?;

    let id = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    if id.is_empty() {
        return Err(warn(
            WarningKind::MalformedFrontmatter,
            "cannot derive rule id from file name".to_string(),
        ));
    }
    let glob_set = GlobSet::compile(&meta.globs)
        .map_err(|e| warn(WarningKind::InvalidGlob, e.to_string()))?;

    Ok(Rule {
        id,
        globs: meta.globs,
        description: meta.description,
        always_apply: meta.always_apply,
        body,
        source: source.to_path_buf(),
        glob_set,
    })
}

/// Find rule documents under a directory, honoring include/exclude patterns
fn find_documents(dir: &Path, config: &Config) -> Vec<PathBuf> {
    let match_opts = MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let include: Vec<_> = config
        .include
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();
    let exclude: Vec<_> = config
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let relative = e
                .path()
                .strip_prefix(dir)
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|_| e.path().to_string_lossy().to_string());

            let included = include.is_empty()
                || include.iter().any(|p| p.matches_with(&relative, match_opts));
            let excluded = exclude.iter().any(|p| p.matches_with(&relative, match_opts));

            if included && !excluded {
                Some(e.path().to_path_buf())
            } else {
                None
            }
        })
        .collect();

    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "---\ndescription: Anchor layout\nglobs: programs/**/*.rs\nalwaysApply: false\n---\nPut handlers in handlers/.\n";
    const ALWAYS: &str = "---\ndescription: Global\nalwaysApply: true\n---\nAlways on.\n";
    const MALFORMED: &str = "no frontmatter at all";

    #[test]
    fn test_load_order_is_stable() {
        let outcome = RuleStore::load_documents(vec![
            ("a.mdc", VALID),
            ("b.mdc", ALWAYS),
        ]);
        let ids: Vec<_> = outcome.store.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_malformed_document_becomes_warning() {
        let outcome = RuleStore::load_documents(vec![
            ("broken.mdc", MALFORMED),
            ("good.mdc", VALID),
        ]);
        assert_eq!(outcome.store.len(), 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::MissingFrontmatter);
        assert_eq!(outcome.store.all()[0].id, "good");
    }

    #[test]
    fn test_invalid_glob_becomes_warning() {
        let doc = "---\nglobs: \"[\"\nalwaysApply: false\n---\nbody\n";
        let outcome = RuleStore::load_documents(vec![("badglob.mdc", doc)]);
        assert!(outcome.store.is_empty());
        assert_eq!(outcome.warnings[0].kind, WarningKind::InvalidGlob);
    }

    #[test]
    fn test_duplicate_id_later_definition_overrides() {
        let outcome = RuleStore::load_documents(vec![
            ("dir1/style.mdc", VALID),
            ("dir2/style.mdc", ALWAYS),
        ]);
        assert_eq!(outcome.store.len(), 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::DuplicateId);
        // Later document wins; the warning names the shadowed source
        assert!(outcome.store.get("style").unwrap().always_apply);
        assert!(outcome.warnings[0].message.contains("dir1/style.mdc"));
    }

    #[test]
    fn test_project_rule_overrides_user_rule_in_place() {
        // User-level rules load first; a same-named project rule replaces the
        // user rule but keeps its position in load order
        const EXTRA: &str = "---\ndescription: Extra\nalwaysApply: true\n---\nAlso on.\n";
        let outcome = RuleStore::load_documents(vec![
            ("user/style.mdc", ALWAYS),
            ("user/zz-extra.mdc", EXTRA),
            (".rules/style.mdc", VALID),
        ]);

        let ids: Vec<_> = outcome.store.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["style", "zz-extra"]);

        let style = outcome.store.get("style").unwrap();
        assert_eq!(style.source, PathBuf::from(".rules/style.mdc"));
        assert!(!style.always_apply);
    }

    #[test]
    fn test_empty_store() {
        let outcome = RuleStore::load_documents(Vec::<(&str, &str)>::new());
        assert!(outcome.store.is_empty());
        assert!(outcome.store.get("anything").is_none());
    }

    #[test]
    fn test_load_dir_missing_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::default();
        let err = RuleStore::load_dir(temp.path(), &config).unwrap_err();
        assert!(matches!(err, RulekitError::RulesDirNotFound(_)));
    }

    #[test]
    fn test_load_dir_sorted_and_filtered() {
        let temp = tempfile::TempDir::new().unwrap();
        let rules = temp.path().join(".rules");
        std::fs::create_dir(&rules).unwrap();
        std::fs::write(rules.join("b-global.mdc"), ALWAYS).unwrap();
        std::fs::write(rules.join("a-anchor.mdc"), VALID).unwrap();
        std::fs::write(rules.join("README.md"), "not a rule").unwrap();
        std::fs::write(rules.join("notes.txt"), "ignored").unwrap();

        let outcome = RuleStore::load_dir(temp.path(), &Config::default()).unwrap();
        let ids: Vec<_> = outcome.store.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a-anchor", "b-global"]);
        assert!(outcome.warnings.is_empty());
    }
}
