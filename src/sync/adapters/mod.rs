//! Tool-specific adapters.

pub mod claude_code;
pub mod cline;
pub mod copilot;
pub mod cursor;
pub mod generic;
pub mod windsurf;

pub use claude_code::ClaudeCodeAdapter;
pub use cline::ClineAdapter;
pub use copilot::CopilotAdapter;
pub use cursor::CursorAdapter;
pub use generic::GenericAdapter;
pub use windsurf::WindsurfAdapter;
