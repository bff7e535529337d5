//! Sync loaded rules into AI tool configuration files.
//!
//! Generates tool-specific rule files so that guidance flows to assistants
//! without manual copying. Users run `rulekit sync` once; always-apply rule
//! bodies are inlined and glob-scoped rules are indexed, inside a marked
//! section that survives user edits around it.
//!
//! ## Supported tools
//!
//! - Cursor (.cursorrules)
//! - Claude Code (CLAUDE.md)
//! - GitHub Copilot (.github/copilot-instructions.md)
//! - Windsurf (.windsurfrules)
//! - Cline (.clinerules)
//! - Generic fallback (AGENTS.md)

pub mod adapter;
pub mod adapters;
pub mod content;
pub mod merge;
pub mod tool;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use adapter::{BootstrapContext, DetectionResult, ToolAdapter};
pub use tool::{MergeStrategy, Tool};

use crate::config::ComposeConfig;
use crate::error::{Result, RulekitError};
use crate::rules::RuleStore;
use adapters::*;

/// Main sync executor - coordinates tool detection and rule file generation
pub struct SyncExecutor {
    adapters: HashMap<Tool, Box<dyn ToolAdapter>>,
}

impl SyncExecutor {
    /// Create a new sync executor with all built-in adapters
    pub fn new() -> Self {
        let mut adapters: HashMap<Tool, Box<dyn ToolAdapter>> = HashMap::new();

        adapters.insert(Tool::Cursor, Box::new(CursorAdapter));
        adapters.insert(Tool::ClaudeCode, Box::new(ClaudeCodeAdapter));
        adapters.insert(Tool::Copilot, Box::new(CopilotAdapter));
        adapters.insert(Tool::Windsurf, Box::new(WindsurfAdapter));
        adapters.insert(Tool::Cline, Box::new(ClineAdapter));
        adapters.insert(Tool::Generic, Box::new(GenericAdapter));

        Self { adapters }
    }

    /// Detect which tools are in use in the project
    pub fn detect_tools(&self, project_root: &Path) -> Vec<Tool> {
        self.adapters
            .iter()
            .filter_map(|(tool, adapter)| {
                let result = adapter.detect(project_root);
                // Generic is never auto-detected - it's added separately as fallback
                if result.detected && *tool != Tool::Generic {
                    Some(*tool)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Get detection results for all tools
    pub fn detect_all(&self, project_root: &Path) -> Vec<DetectionResult> {
        self.adapters
            .values()
            .map(|adapter| adapter.detect(project_root))
            .collect()
    }

    /// Write one tool's rule file from the loaded store
    pub fn bootstrap_tool(
        &self,
        tool: Tool,
        project_root: &Path,
        store: &RuleStore,
        compose: &ComposeConfig,
    ) -> Result<BootstrapResult> {
        let adapter = self
            .adapters
            .get(&tool)
            .ok_or_else(|| RulekitError::Other(format!("no adapter for tool: {:?}", tool)))?;

        let context = BootstrapContext {
            project_root,
            tool,
            store,
            compose,
        };

        let content = adapter.generate(&context)?;
        let output_path = project_root.join(tool.output_path());

        if let Some(parent) = output_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let (start_marker, end_marker) = adapter.section_markers();
        let action = if output_path.exists() {
            let existing = std::fs::read_to_string(&output_path)?;
            let merged = merge::merge_content(
                adapter.merge_strategy(),
                &existing,
                &content,
                start_marker,
                end_marker,
            );
            std::fs::write(&output_path, merged)?;
            BootstrapAction::Merged
        } else {
            let final_content = format!("{}\n{}\n{}", start_marker, content, end_marker);
            std::fs::write(&output_path, final_content)?;
            BootstrapAction::Created
        };

        Ok(BootstrapResult {
            tool,
            output_path,
            action,
        })
    }

    /// Bootstrap all detected tools plus the generic fallback
    pub fn bootstrap_all(
        &self,
        project_root: &Path,
        store: &RuleStore,
        compose: &ComposeConfig,
    ) -> Vec<Result<BootstrapResult>> {
        let mut tools = self.detect_tools(project_root);

        // Always include generic as fallback if AGENTS.md doesn't exist
        if !project_root.join("AGENTS.md").exists() {
            tools.push(Tool::Generic);
        }

        tools
            .into_iter()
            .map(|tool| self.bootstrap_tool(tool, project_root, store, compose))
            .collect()
    }
}

impl Default for SyncExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of bootstrapping a tool
#[derive(Debug)]
pub struct BootstrapResult {
    pub tool: Tool,
    pub output_path: PathBuf,
    pub action: BootstrapAction,
}

/// Action taken during bootstrap
#[derive(Debug, PartialEq, Eq)]
pub enum BootstrapAction {
    /// File was created
    Created,
    /// Existing file was merged
    Merged,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> RuleStore {
        RuleStore::load_documents(vec![(
            "global.mdc",
            "---\ndescription: Global\nalwaysApply: true\n---\nGlobal guidance body.\n",
        )])
        .store
    }

    #[test]
    fn test_sync_executor_creation() {
        let executor = SyncExecutor::new();
        assert_eq!(executor.adapters.len(), 6);
    }

    #[test]
    fn test_detect_tools_empty_project() {
        let temp = TempDir::new().unwrap();
        let executor = SyncExecutor::new();
        let detected = executor.detect_tools(temp.path());

        assert!(!detected.contains(&Tool::Cursor));
        assert!(!detected.contains(&Tool::Copilot));
        assert!(!detected.contains(&Tool::Generic));
    }

    #[test]
    fn test_detect_tools_with_cursorrules() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".cursorrules"), "").unwrap();

        let executor = SyncExecutor::new();
        let detected = executor.detect_tools(temp.path());

        assert!(detected.contains(&Tool::Cursor));
    }

    #[test]
    fn test_bootstrap_creates_file() {
        let temp = TempDir::new().unwrap();
        let executor = SyncExecutor::new();

        let result = executor
            .bootstrap_tool(Tool::Generic, temp.path(), &store(), &Default::default())
            .unwrap();

        assert_eq!(result.action, BootstrapAction::Created);
        assert!(result.output_path.exists());

        let content = std::fs::read_to_string(&result.output_path).unwrap();
        assert!(content.contains("Global guidance body."));
        assert!(content.contains("BEGIN RULEKIT GENERATED"));
    }

    #[test]
    fn test_bootstrap_merges_existing() {
        let temp = TempDir::new().unwrap();
        let existing_content = "# My Project\n\nSome existing content.";
        std::fs::write(temp.path().join(".cursorrules"), existing_content).unwrap();

        let executor = SyncExecutor::new();
        let result = executor
            .bootstrap_tool(Tool::Cursor, temp.path(), &store(), &Default::default())
            .unwrap();

        assert_eq!(result.action, BootstrapAction::Merged);

        let content = std::fs::read_to_string(&result.output_path).unwrap();
        assert!(content.contains("My Project"));
        assert!(content.contains("Global guidance body."));
        assert!(content.contains("BEGIN RULEKIT GENERATED"));
    }
}
