/// Configuration loading from exam.json
use crate::config::types::{ExamConfig, ExamError, Result};
use std::path::{Path, PathBuf};

/// File name looked up under the working root when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "exam.json";

impl ExamConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExamError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: ExamConfig = serde_json::from_str(&content).map_err(|e| {
            ExamError::Config(format!("Failed to parse config JSON {}: {}", path.display(), e))
        })?;

        Ok(config)
    }

    /// Load `{root}/exam.json` when it exists, defaults otherwise.
    ///
    /// A `root` written in the file is relative to the directory holding it.
    pub fn load_or_default(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let candidate: Option<PathBuf> = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let path = root.join(DEFAULT_CONFIG_FILE);
                path.exists().then_some(path)
            }
        };

        let Some(path) = candidate else {
            log::debug!("No {} under {}, using defaults", DEFAULT_CONFIG_FILE, root.display());
            return Ok(Self::with_root(root));
        };

        let mut config = Self::load_from_file(&path)?;
        if config.root.is_relative() {
            let base = path.parent().unwrap_or(root);
            config.root = base.join(&config.root);
        }
        log::info!("Loaded exam configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults_rooted_at_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExamConfig::load_or_default(dir.path(), None).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.interpreter, "python3");
    }

    #[test]
    fn test_partial_json_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "interpreter": "python3.12", "timeout_secs": 4 }"#,
        )
        .unwrap();

        let config = ExamConfig::load_or_default(dir.path(), None).unwrap();
        assert_eq!(config.interpreter, "python3.12");
        assert_eq!(config.timeout_secs, 4);
        assert_eq!(config.rendu_dir, PathBuf::from("py_rendu"));
        assert_eq!(config.root, dir.path().join("."));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ExamConfig::load_or_default(dir.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, ExamError::Config(_)));
    }
}
