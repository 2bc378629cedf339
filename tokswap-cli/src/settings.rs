use std::path::{Path, PathBuf};
use tokswap_core::{InternalResult, RewriteConfig, Rule, Ruleset, preset};
use tracing::debug;

/// Effective rewrite settings.
/// Supported sources (in order of precedence):
/// - CLI arguments
/// - Config file (only read if it exists)
/// - Built-in defaults (`src/App.tsx`, the default preset)
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: RewriteConfig,
    pub rules: Vec<Rule>,
    pub preset: Option<String>,
}

impl Settings {
    pub fn initialize(
        config_path: &Path,
        source: Option<PathBuf>,
        destination: Option<PathBuf>,
        preset: Option<String>,
        rules: Vec<Rule>,
    ) -> InternalResult<Self> {
        let mut config = if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            RewriteConfig::from_file(config_path)?
        } else {
            RewriteConfig::default()
        };

        if let Some(source) = source {
            config.source_path = source;
        }
        if let Some(destination) = destination {
            config.destination_path = Some(destination);
        }

        Ok(Self {
            config,
            rules,
            preset,
        })
    }

    pub fn source(&self) -> &Path {
        &self.config.source_path
    }

    pub fn destination(&self) -> &Path {
        self.config.destination()
    }

    /// Inline rules win over a preset flag, which wins over the config file.
    pub fn ruleset(&self) -> InternalResult<Ruleset> {
        if !self.rules.is_empty() {
            return Ruleset::new(self.rules.clone());
        }
        if let Some(name) = &self.preset {
            return preset::ruleset(name);
        }
        self.config.ruleset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;
    use tokswap_core::RewriteError;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("tokswap.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let settings = Settings::initialize(
            Path::new("/nonexistent/tokswap.json"),
            None,
            None,
            None,
            Vec::new(),
        )
        .unwrap();
        assert_eq!(settings.source(), Path::new("src/App.tsx"));
        assert_eq!(settings.destination(), Path::new("src/App.tsx"));
        assert_eq!(settings.ruleset().unwrap().len(), 16);
    }

    #[test]
    fn test_arguments_override_config_file() {
        let (_dir, path) = write_config(
            r#"{
                "source_path": "index.html",
                "destination_path": "dist/index.html",
                "rules": [{ "pattern": "blue", "replacement": "green" }]
            }"#,
        );

        let settings = Settings::initialize(&path, None, None, None, Vec::new()).unwrap();
        assert_eq!(settings.source(), Path::new("index.html"));
        assert_eq!(settings.destination(), Path::new("dist/index.html"));
        assert_eq!(
            settings.ruleset().unwrap().rules(),
            &[Rule::new("blue", "green")]
        );

        let settings = Settings::initialize(
            &path,
            Some(PathBuf::from("page.tsx")),
            Some(PathBuf::from("page.out.tsx")),
            None,
            vec![Rule::new("red", "amber")],
        )
        .unwrap();
        assert_eq!(settings.source(), Path::new("page.tsx"));
        assert_eq!(settings.destination(), Path::new("page.out.tsx"));
        assert_eq!(
            settings.ruleset().unwrap().rules(),
            &[Rule::new("red", "amber")]
        );
    }

    #[test]
    fn test_preset_flag_beats_config_rules() {
        let (_dir, path) =
            write_config(r#"{ "rules": [{ "pattern": "blue", "replacement": "green" }] }"#);

        let settings =
            Settings::initialize(&path, None, None, Some("emerald".to_string()), Vec::new())
                .unwrap();
        assert_eq!(settings.ruleset().unwrap().len(), 16);
    }

    #[test]
    fn test_broken_config_file_is_an_error() {
        let (_dir, path) = write_config("{ not json");
        let result = Settings::initialize(&path, None, None, None, Vec::new());
        assert!(matches!(result, Err(RewriteError::Config(_))));
    }
}
