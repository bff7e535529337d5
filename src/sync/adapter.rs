//! Trait definition for tool-specific adapters.

use std::path::{Path, PathBuf};

use super::tool::{MergeStrategy, Tool};
use crate::config::ComposeConfig;
use crate::error::Result;
use crate::rules::RuleStore;

/// Result of tool detection
#[derive(Debug)]
pub struct DetectionResult {
    pub tool: Tool,
    pub detected: bool,
    pub reason: String,
    pub existing_file: Option<PathBuf>,
}

/// Context for rule file generation
pub struct BootstrapContext<'a> {
    pub project_root: &'a Path,
    pub tool: Tool,
    pub store: &'a RuleStore,
    pub compose: &'a ComposeConfig,
}

/// Tool adapter trait - implement for each supported tool
pub trait ToolAdapter: Send + Sync {
    /// Get the tool identifier
    fn tool(&self) -> Tool;

    /// Detect if this tool is in use in the project
    fn detect(&self, project_root: &Path) -> DetectionResult;

    /// Generate rule file content for this tool
    fn generate(&self, context: &BootstrapContext) -> Result<String>;

    /// Get the merge strategy for existing files
    fn merge_strategy(&self) -> MergeStrategy {
        MergeStrategy::Section
    }

    /// Get section markers for content preservation
    fn section_markers(&self) -> (&'static str, &'static str) {
        (
            "<!-- BEGIN RULEKIT GENERATED CONTENT - DO NOT EDIT -->",
            "<!-- END RULEKIT GENERATED CONTENT -->",
        )
    }
}
