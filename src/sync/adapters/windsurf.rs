//! Windsurf adapter

use std::path::Path;

use crate::error::Result;
use crate::sync::adapter::{BootstrapContext, DetectionResult, ToolAdapter};
use crate::sync::content::generate_tool_markdown;
use crate::sync::tool::Tool;

/// Windsurf adapter - generates .windsurfrules
pub struct WindsurfAdapter;

impl ToolAdapter for WindsurfAdapter {
    fn tool(&self) -> Tool {
        Tool::Windsurf
    }

    fn detect(&self, project_root: &Path) -> DetectionResult {
        let windsurfrules = project_root.join(".windsurfrules");

        DetectionResult {
            tool: Tool::Windsurf,
            detected: windsurfrules.exists(),
            reason: if windsurfrules.exists() {
                ".windsurfrules exists".into()
            } else {
                "Not detected".into()
            },
            existing_file: if windsurfrules.exists() {
                Some(windsurfrules)
            } else {
                None
            },
        }
    }

    fn generate(&self, context: &BootstrapContext) -> Result<String> {
        generate_tool_markdown(Tool::Windsurf, context.store, context.compose)
    }
}
