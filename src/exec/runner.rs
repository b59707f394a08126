/// Candidate solution execution under a wall-clock limit
use crate::config::types::{ExamConfig, OutputIntegrity, OutputLimits, Result};
use crate::exec::guard::ChildGuard;
use crate::exec::output::{CapturedOutput, OutputCollector};
use crate::judge::{adapter_for, LanguageAdapter};
use serde::{Deserialize, Serialize};
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Everything observed from one completed candidate run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    pub captured: CapturedOutput,
    /// `None` when the process was ended by a signal
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
    pub success: bool,
    pub elapsed: Duration,
    pub integrity: OutputIntegrity,
}

impl RunOutput {
    /// Failed and printed nothing at all on stdout
    pub fn crashed_silently(&self) -> bool {
        !self.success && self.captured.stdout.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("solution file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("solution ran for more than {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed while waiting for solution: {0}")]
    Wait(#[source] std::io::Error),
}

/// Seam between the session controller and process execution
pub trait ExecutionBackend {
    /// Where the solution for `level` is expected
    fn solution_path(&self, level: u32) -> PathBuf;
    fn run(&self, level: u32) -> std::result::Result<RunOutput, RunError>;
}

/// Directory convention: one `lvl{N}` directory per level, one solution file inside
#[derive(Debug, Clone)]
pub struct SolutionLayout {
    rendu_dir: PathBuf,
    file_name: String,
}

impl SolutionLayout {
    pub fn new(rendu_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            rendu_dir: rendu_dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn level_dir(&self, level: u32) -> PathBuf {
        self.rendu_dir.join(format!("lvl{level}"))
    }

    pub fn solution_path(&self, level: u32) -> PathBuf {
        self.level_dir(level).join(&self.file_name)
    }
}

pub struct SolutionRunner {
    layout: SolutionLayout,
    adapter: Box<dyn LanguageAdapter>,
    timeout: Duration,
    collector: OutputCollector,
}

impl SolutionRunner {
    pub fn new(
        rendu_dir: impl Into<PathBuf>,
        adapter: Box<dyn LanguageAdapter>,
        timeout: Duration,
        limits: OutputLimits,
    ) -> Self {
        let layout = SolutionLayout::new(rendu_dir, adapter.solution_file());
        Self {
            layout,
            adapter,
            timeout,
            collector: OutputCollector::new(limits),
        }
    }

    pub fn from_config(config: &ExamConfig) -> Result<Self> {
        let adapter = adapter_for(&config.language, &config.interpreter)?;
        Ok(Self::new(
            config.rendu_path(),
            adapter,
            config.timeout(),
            config.output.clone(),
        ))
    }

    /// Execute one source file and capture its output
    pub fn run_file(&self, source: &Path) -> std::result::Result<RunOutput, RunError> {
        if !source.is_file() {
            return Err(RunError::NotFound(source.to_path_buf()));
        }

        let argv = self.adapter.run_command(source);
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| RunError::Spawn {
                program: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            })?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .process_group(0);
        for (key, value) in self.adapter.environment() {
            cmd.env(key, value);
        }

        log::debug!("Spawning {:?}", argv);
        let started = Instant::now();
        let child = cmd.spawn().map_err(|source| RunError::Spawn {
            program: program.clone(),
            source,
        })?;

        let mut guard = ChildGuard::new(child);
        let pending = self.collector.start(
            guard.child_mut().stdout.take(),
            guard.child_mut().stderr.take(),
        );

        let status = match guard.wait_until(started + self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let report = guard.terminate();
                log::warn!(
                    "Solution {} exceeded {:?}; group terminated (term={}, kill={}, waited={}ms)",
                    source.display(),
                    self.timeout,
                    report.term_sent,
                    report.kill_sent,
                    report.waited_ms
                );
                let _ = pending.finish();
                return Err(RunError::Timeout(self.timeout));
            }
            Err(e) => {
                guard.terminate();
                let _ = pending.finish();
                return Err(RunError::Wait(e));
            }
        };

        guard.reap_stragglers();
        let elapsed = started.elapsed();
        let collected = pending.finish();
        let integrity = collected.combined_integrity();
        if integrity != OutputIntegrity::Complete {
            log::warn!("Output of {} is {}", source.display(), integrity);
        }

        log::debug!(
            "Solution {} exited with {:?} after {:?}",
            source.display(),
            status.code(),
            elapsed
        );

        Ok(RunOutput {
            captured: collected.captured(),
            exit_code: status.code(),
            signal: status.signal(),
            success: status.success(),
            elapsed,
            integrity,
        })
    }
}

impl ExecutionBackend for SolutionRunner {
    fn solution_path(&self, level: u32) -> PathBuf {
        self.layout.solution_path(level)
    }

    fn run(&self, level: u32) -> std::result::Result<RunOutput, RunError> {
        self.run_file(&self.layout.solution_path(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_follows_level_directory_convention() {
        let layout = SolutionLayout::new("py_rendu", "solution.py");
        assert_eq!(layout.level_dir(7), PathBuf::from("py_rendu/lvl7"));
        assert_eq!(
            layout.solution_path(42),
            PathBuf::from("py_rendu/lvl42/solution.py")
        );
    }

    #[test]
    fn test_crashed_silently_needs_failure_and_empty_stdout() {
        let mut out = RunOutput {
            success: false,
            exit_code: Some(1),
            ..Default::default()
        };
        assert!(out.crashed_silently());

        out.captured.stdout = "partial".to_string();
        assert!(!out.crashed_silently());

        out.captured.stdout.clear();
        out.success = true;
        assert!(!out.crashed_silently());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExamConfig::with_root(dir.path());
        let runner = SolutionRunner::from_config(&config).unwrap();

        match runner.run(0) {
            Err(RunError::NotFound(path)) => {
                assert_eq!(path, dir.path().join("py_rendu/lvl0/solution.py"))
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
