use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    error::{InternalResult, RewriteError},
    preset,
    rule::{Rule, Ruleset},
};

pub const DEFAULT_SOURCE_PATH: &str = "src/App.tsx";

/// What to rewrite, where to write it, and with which rules.
///
/// Loaded from JSON. Every field is optional:
///
/// ```json
/// {
///   "source_path": "src/App.tsx",
///   "destination_path": "build/App.tsx",
///   "rules": [{ "pattern": "text-blue-900", "replacement": "text-slate-900" }]
/// }
/// ```
///
/// When `rules` is empty the named `preset` is used, and when that is unset
/// too, the default preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteConfig {
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    #[serde(default)]
    pub destination_path: Option<PathBuf>,

    #[serde(default)]
    pub preset: Option<String>,

    #[serde(default)]
    pub rules: Vec<Rule>,
}

fn default_source_path() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_PATH)
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            destination_path: None,
            preset: None,
            rules: Vec::new(),
        }
    }
}

impl RewriteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            RewriteError::config(format!(
                "Failed to open config file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            RewriteError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn from_json(s: &str) -> InternalResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| RewriteError::config(format!("Failed to parse config: {}", e)))
    }

    /// Where the result is written: the destination if set, else the source.
    pub fn destination(&self) -> &Path {
        self.destination_path
            .as_deref()
            .unwrap_or(self.source_path.as_path())
    }

    /// Resolve the ruleset: explicit rules, then the named preset, then the default preset.
    pub fn ruleset(&self) -> InternalResult<Ruleset> {
        if !self.rules.is_empty() {
            return Ruleset::new(self.rules.clone());
        }
        let name = self.preset.as_deref().unwrap_or(preset::DEFAULT_PRESET);
        preset::ruleset(name)
    }
}
