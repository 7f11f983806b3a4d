use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".typenamerrc.json";

/// Build artifacts and generated sources that should never be renamed.
pub const GENERATED_FILE_PATTERNS: &[&str] = &[
    "**/*.g.cs",
    "**/*.g.i.cs",
    "**/*.AssemblyInfo.cs",
    "**/obj/**",
    "**/bin/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns or literal paths to leave alone.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Directories (relative to the source root) to scan. Empty means the
    /// whole source root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_generated_files")]
    pub ignore_generated_files: bool,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_generated_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            source_root: default_source_root(),
            ignore_generated_files: default_ignore_generated_files(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load the config from the working directory, falling back to defaults
    /// when no config file is present.
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

pub fn default_config_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&Config::default())?)
}
