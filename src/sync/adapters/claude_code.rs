//! Claude Code adapter

use std::path::Path;

use crate::error::Result;
use crate::sync::adapter::{BootstrapContext, DetectionResult, ToolAdapter};
use crate::sync::content::generate_tool_markdown;
use crate::sync::tool::Tool;

/// Claude Code adapter - generates CLAUDE.md
pub struct ClaudeCodeAdapter;

impl ToolAdapter for ClaudeCodeAdapter {
    fn tool(&self) -> Tool {
        Tool::ClaudeCode
    }

    fn detect(&self, project_root: &Path) -> DetectionResult {
        let claude_md = project_root.join("CLAUDE.md");
        let claude_dir = project_root.join(".claude");

        DetectionResult {
            tool: Tool::ClaudeCode,
            detected: claude_md.exists() || claude_dir.exists(),
            reason: if claude_md.exists() {
                "CLAUDE.md exists".into()
            } else if claude_dir.exists() {
                ".claude/ directory exists".into()
            } else {
                "Not detected".into()
            },
            existing_file: if claude_md.exists() {
                Some(claude_md)
            } else {
                None
            },
        }
    }

    fn generate(&self, context: &BootstrapContext) -> Result<String> {
        generate_tool_markdown(Tool::ClaudeCode, context.store, context.compose)
    }
}
