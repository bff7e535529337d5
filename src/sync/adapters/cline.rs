//! Cline adapter

use std::path::Path;

use crate::error::Result;
use crate::sync::adapter::{BootstrapContext, DetectionResult, ToolAdapter};
use crate::sync::content::generate_tool_markdown;
use crate::sync::tool::Tool;

/// Cline adapter - generates .clinerules
pub struct ClineAdapter;

impl ToolAdapter for ClineAdapter {
    fn tool(&self) -> Tool {
        Tool::Cline
    }

    fn detect(&self, project_root: &Path) -> DetectionResult {
        let clinerules = project_root.join(".clinerules");

        DetectionResult {
            tool: Tool::Cline,
            detected: clinerules.exists(),
            reason: if clinerules.exists() {
                ".clinerules exists".into()
            } else {
                "Not detected".into()
            },
            existing_file: if clinerules.exists() {
                Some(clinerules)
            } else {
                None
            },
        }
    }

    fn generate(&self, context: &BootstrapContext) -> Result<String> {
        generate_tool_markdown(Tool::Cline, context.store, context.compose)
    }
}
