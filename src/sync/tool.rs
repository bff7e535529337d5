//! Supported AI tool definitions and metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// AI development tools rulekit can bootstrap rule files for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    Cursor,
    ClaudeCode,
    Copilot,
    Windsurf,
    Cline,
    Generic,
}

impl Tool {
    /// All built-in tools
    pub fn all() -> &'static [Tool] {
        &[
            Tool::Cursor,
            Tool::ClaudeCode,
            Tool::Copilot,
            Tool::Windsurf,
            Tool::Cline,
            Tool::Generic,
        ]
    }

    /// Default output path for this tool, relative to the project root
    pub fn output_path(&self) -> &'static str {
        match self {
            Tool::Cursor => ".cursorrules",
            Tool::ClaudeCode => "CLAUDE.md",
            Tool::Copilot => ".github/copilot-instructions.md",
            Tool::Windsurf => ".windsurfrules",
            Tool::Cline => ".clinerules",
            Tool::Generic => "AGENTS.md",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Cursor => "Cursor",
            Tool::ClaudeCode => "Claude Code",
            Tool::Copilot => "GitHub Copilot",
            Tool::Windsurf => "Windsurf",
            Tool::Cline => "Cline",
            Tool::Generic => "Generic (AGENTS.md)",
        }
    }

    /// Parse tool name from string
    pub fn from_name(name: &str) -> Option<Tool> {
        match name.to_lowercase().as_str() {
            "cursor" => Some(Tool::Cursor),
            "claude-code" | "claudecode" | "claude" => Some(Tool::ClaudeCode),
            "copilot" | "github-copilot" => Some(Tool::Copilot),
            "windsurf" => Some(Tool::Windsurf),
            "cline" => Some(Tool::Cline),
            "generic" | "agents" => Some(Tool::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Merge strategy for existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Replace entire file
    Replace,
    /// Replace only the marked section
    Section,
    /// Append to end of file
    Append,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_output_paths() {
        assert_eq!(Tool::Cursor.output_path(), ".cursorrules");
        assert_eq!(Tool::ClaudeCode.output_path(), "CLAUDE.md");
        assert_eq!(
            Tool::Copilot.output_path(),
            ".github/copilot-instructions.md"
        );
        assert_eq!(Tool::Generic.output_path(), "AGENTS.md");
    }

    #[test]
    fn test_tool_from_name() {
        assert_eq!(Tool::from_name("cursor"), Some(Tool::Cursor));
        assert_eq!(Tool::from_name("Claude-Code"), Some(Tool::ClaudeCode));
        assert_eq!(Tool::from_name("unknown"), None);
    }
}
