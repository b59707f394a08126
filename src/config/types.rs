/// Core types and structures shared across the exam engine
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Highest level number in the exam. `MAX_LEVEL + 1` means "all complete".
pub const MAX_LEVEL: u32 = 59;

/// Number of gradable levels.
pub const LEVEL_COUNT: usize = MAX_LEVEL as usize + 1;

/// Levels grouped under one topic label.
pub const LEVELS_PER_TOPIC: u32 = 3;

/// Wall-clock limit applied to a candidate run unless configured otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Output limits for candidate stream collection
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputLimits {
    /// Per-stream stdout limit (bytes)
    pub stdout_limit: usize,
    /// Per-stream stderr limit (bytes)
    pub stderr_limit: usize,
    /// How long to wait for collectors after the child is gone (milliseconds)
    pub collection_timeout_ms: u64,
}

impl Default for OutputLimits {
    fn default() -> Self {
        OutputLimits {
            stdout_limit: 8 * 1024 * 1024, // 8 MB stdout
            stderr_limit: 2 * 1024 * 1024, // 2 MB stderr
            collection_timeout_ms: 2000,
        }
    }
}

/// Output integrity classification
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputIntegrity {
    #[default]
    #[serde(rename = "complete")]
    Complete,
    #[serde(rename = "truncated_by_limit")]
    TruncatedByLimit,
    #[serde(rename = "collector_timeout")]
    CollectorTimeout,
    #[serde(rename = "read_error")]
    ReadError,
}

impl std::fmt::Display for OutputIntegrity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputIntegrity::Complete => write!(f, "complete"),
            OutputIntegrity::TruncatedByLimit => write!(f, "truncated_by_limit"),
            OutputIntegrity::CollectorTimeout => write!(f, "collector_timeout"),
            OutputIntegrity::ReadError => write!(f, "read_error"),
        }
    }
}

/// Exam engine configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExamConfig {
    /// Working root; relative paths below resolve against it
    pub root: PathBuf,
    /// Progress file holding the current level
    pub level_file: PathBuf,
    /// Directory holding one `lvl{N}/solution.py` per level
    pub rendu_dir: PathBuf,
    /// Directory receiving `trace_lvl{N}.txt` files
    pub traces_dir: PathBuf,
    /// Directory receiving exported subject texts
    pub subjects_dir: PathBuf,
    /// Language adapter name
    pub language: String,
    /// Interpreter program used to execute solutions
    pub interpreter: String,
    /// Wall-clock limit per run, in seconds
    pub timeout_secs: u64,
    /// Stream collection limits
    pub output: OutputLimits,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            level_file: PathBuf::from(".py_level"),
            rendu_dir: PathBuf::from("py_rendu"),
            traces_dir: PathBuf::from("py_traces"),
            subjects_dir: PathBuf::from("py_subjects"),
            language: "python".to_string(),
            interpreter: "python3".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: OutputLimits::default(),
        }
    }
}

impl ExamConfig {
    /// Config rooted at `root` with every other field defaulted
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn level_file_path(&self) -> PathBuf {
        self.resolve(&self.level_file)
    }

    pub fn rendu_path(&self) -> PathBuf {
        self.resolve(&self.rendu_dir)
    }

    pub fn traces_path(&self) -> PathBuf {
        self.resolve(&self.traces_dir)
    }

    pub fn subjects_path(&self) -> PathBuf {
        self.resolve(&self.subjects_dir)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject configurations the runner cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ExamError::Config("timeout_secs must be at least 1".to_string()));
        }
        if self.interpreter.trim().is_empty() {
            return Err(ExamError::Config("interpreter must not be empty".to_string()));
        }
        if self.output.stdout_limit == 0 || self.output.stderr_limit == 0 {
            return Err(ExamError::Config(
                "output stream limits must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Custom error types for the exam engine
#[derive(Error, Debug)]
pub enum ExamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No level {0} is registered")]
    UnknownLevel(u32),

    #[error("Level registry error: {0}")]
    Registry(String),
}

pub type Result<T> = std::result::Result<T, ExamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_resolve_against_root() {
        let config = ExamConfig::with_root("/srv/exam");
        assert_eq!(config.level_file_path(), PathBuf::from("/srv/exam/.py_level"));
        assert_eq!(config.rendu_path(), PathBuf::from("/srv/exam/py_rendu"));
        assert_eq!(config.traces_path(), PathBuf::from("/srv/exam/py_traces"));
        assert_eq!(config.subjects_path(), PathBuf::from("/srv/exam/py_subjects"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let mut config = ExamConfig::with_root("/srv/exam");
        config.traces_dir = PathBuf::from("/var/log/traces");
        assert_eq!(config.traces_path(), PathBuf::from("/var/log/traces"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout_and_empty_interpreter() {
        let mut config = ExamConfig::default();
        assert!(config.validate().is_ok());

        config.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ExamError::Config(_))));

        config.timeout_secs = 5;
        config.interpreter = "  ".to_string();
        assert!(matches!(config.validate(), Err(ExamError::Config(_))));
    }

    #[test]
    fn test_output_integrity_display() {
        assert_eq!(format!("{}", OutputIntegrity::Complete), "complete");
        assert_eq!(format!("{}", OutputIntegrity::TruncatedByLimit), "truncated_by_limit");
        assert_eq!(format!("{}", OutputIntegrity::CollectorTimeout), "collector_timeout");
        assert_eq!(format!("{}", OutputIntegrity::ReadError), "read_error");
    }
}
