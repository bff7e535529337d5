//! GitHub Copilot adapter

use std::path::Path;

use crate::error::Result;
use crate::sync::adapter::{BootstrapContext, DetectionResult, ToolAdapter};
use crate::sync::content::generate_tool_markdown;
use crate::sync::tool::Tool;

/// GitHub Copilot adapter - generates .github/copilot-instructions.md
pub struct CopilotAdapter;

impl ToolAdapter for CopilotAdapter {
    fn tool(&self) -> Tool {
        Tool::Copilot
    }

    fn detect(&self, project_root: &Path) -> DetectionResult {
        let instructions = project_root.join(".github/copilot-instructions.md");
        let github_dir = project_root.join(".github");

        DetectionResult {
            tool: Tool::Copilot,
            detected: instructions.exists() || github_dir.is_dir(),
            reason: if instructions.exists() {
                "copilot-instructions.md exists".into()
            } else if github_dir.is_dir() {
                ".github/ directory exists".into()
            } else {
                "Not detected".into()
            },
            existing_file: if instructions.exists() {
                Some(instructions)
            } else {
                None
            },
        }
    }

    fn generate(&self, context: &BootstrapContext) -> Result<String> {
        generate_tool_markdown(Tool::Copilot, context.store, context.compose)
    }
}
