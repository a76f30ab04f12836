//! Generator configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::diagnostic::GeneratorError;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "fpgen.json";

/// Configuration for the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory containing definition files.
    pub definitions_dir: PathBuf,

    /// Definition file format (default: "json").
    pub format: String,

    /// PSR-4 namespace prefix to directory mapping.
    pub psr4: BTreeMap<String, PathBuf>,

    /// PSR-0 namespace prefix to directory mapping.
    pub psr0: BTreeMap<String, PathBuf>,

    /// Directory with template overrides.
    pub template_dir: Option<PathBuf>,

    /// Generate without writing any file.
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            definitions_dir: PathBuf::from("definitions"),
            format: "json".to_string(),
            psr4: BTreeMap::new(),
            psr0: BTreeMap::new(),
            template_dir: None,
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let content = std::fs::read_to_string(path).map_err(|e| GeneratorError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| GeneratorError::ConfigParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Loads configuration from `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, GeneratorError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }
}
