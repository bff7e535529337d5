//! Generic fallback adapter

use std::path::Path;

use crate::error::Result;
use crate::sync::adapter::{BootstrapContext, DetectionResult, ToolAdapter};
use crate::sync::content::generate_tool_markdown;
use crate::sync::tool::Tool;

/// Generic adapter - generates AGENTS.md, the tool-agnostic fallback
pub struct GenericAdapter;

impl ToolAdapter for GenericAdapter {
    fn tool(&self) -> Tool {
        Tool::Generic
    }

    fn detect(&self, project_root: &Path) -> DetectionResult {
        let agents_md = project_root.join("AGENTS.md");

        DetectionResult {
            tool: Tool::Generic,
            detected: agents_md.exists(),
            reason: if agents_md.exists() {
                "AGENTS.md exists".into()
            } else {
                "Not detected".into()
            },
            existing_file: if agents_md.exists() {
                Some(agents_md)
            } else {
                None
            },
        }
    }

    fn generate(&self, context: &BootstrapContext) -> Result<String> {
        generate_tool_markdown(Tool::Generic, context.store, context.compose)
    }
}
