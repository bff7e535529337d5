//! Project configuration loading and defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default config file name, looked up at the project root.
pub const CONFIG_FILE: &str = ".rulekit.config.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

/// Main rulekit configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory containing rule documents, relative to the project root
    #[serde(default = "default_rules_dir", rename = "rulesDir")]
    pub rules_dir: PathBuf,

    /// File patterns to load from the rules directory (glob syntax)
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// File patterns to skip (glob syntax)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Also load rules from the user-level directory
    /// (`$XDG_CONFIG_HOME/rulekit/rules`), before project rules
    #[serde(default, rename = "userRules")]
    pub user_rules: bool,

    /// Composition output settings
    #[serde(default)]
    pub compose: ComposeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules_dir: default_rules_dir(),
            include: default_include(),
            exclude: default_exclude(),
            user_rules: false,
            compose: ComposeConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from a path if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// User-level rules directory, if enabled and resolvable
    pub fn user_rules_dir(&self) -> Option<PathBuf> {
        if !self.user_rules {
            return None;
        }
        dirs::config_dir().map(|d| d.join("rulekit").join("rules"))
    }
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from(".rules")
}

fn default_include() -> Vec<String> {
    vec!["**/*.mdc".to_string(), "**/*.md".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["**/README.md".to_string(), "**/.git/**".to_string()]
}

/// Composition output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Delimiter inserted between rule bodies
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Emit a header line naming each rule before its body
    #[serde(default = "default_true")]
    pub headers: bool,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            headers: default_true(),
        }
    }
}

fn default_delimiter() -> String {
    "---".to_string()
}

fn default_true() -> bool {
    true
}
