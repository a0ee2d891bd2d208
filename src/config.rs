use serde::Deserialize;
use std::path::Path;

use crate::error::EtextError;
use crate::etext::{MarkerPolicy, Markers};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub start_marker: String,
    pub end_marker: String,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        let markers = Markers::default();
        Self {
            start_marker: markers.start,
            end_marker: markers.end,
            strict: false,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, EtextError> {
        let content = std::fs::read_to_string(path).map_err(|e| EtextError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| EtextError::Config {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })?;

        // An empty prefix matches every paragraph
        if config.start_marker.is_empty() || config.end_marker.is_empty() {
            return Err(EtextError::Config {
                path: path.to_path_buf(),
                reason: "markers must not be empty".to_string(),
            });
        }

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in markers
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, EtextError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Config::default()),
        }
    }

    pub fn markers(&self) -> Markers {
        Markers {
            start: self.start_marker.clone(),
            end: self.end_marker.clone(),
        }
    }

    /// `--strict` on the command line can only tighten the policy
    pub fn policy(&self, strict_flag: bool) -> MarkerPolicy {
        if self.strict || strict_flag {
            MarkerPolicy::Strict
        } else {
            MarkerPolicy::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etext::boundary::START_MARKER;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_uses_gutenberg_markers() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config.markers(), Markers::default());
        assert_eq!(config.policy(false), MarkerPolicy::Lenient);
        assert_eq!(config.policy(true), MarkerPolicy::Strict);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = config_file("strict = true\n");
        let config = Config::load(file.path()).unwrap();
        assert!(config.strict);
        assert_eq!(config.start_marker, START_MARKER);
        assert_eq!(config.policy(false), MarkerPolicy::Strict);
    }

    #[test]
    fn test_custom_markers() {
        let file = config_file(
            "start_marker = \"*** START OF THE PROJECT GUTENBERG EBOOK\"\n\
             end_marker = \"*** END OF THE PROJECT GUTENBERG EBOOK\"\n",
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.markers().start, "*** START OF THE PROJECT GUTENBERG EBOOK");
        assert_eq!(config.markers().end, "*** END OF THE PROJECT GUTENBERG EBOOK");
    }

    #[test]
    fn test_empty_marker_rejected() {
        let file = config_file("start_marker = \"\"\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, EtextError::Config { .. }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = config_file("start = \"x\"\n");
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, EtextError::Config { .. }));
    }
}
