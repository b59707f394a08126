/// Trace and subject files written next to the student's work
use crate::config::types::Result;
use crate::verdict::attempt::GradeAttempt;
use std::fs;
use std::path::PathBuf;

/// Writes `trace_lvl{N}.txt`, one per level, overwritten on every attempt
#[derive(Debug, Clone)]
pub struct TraceStore {
    dir: PathBuf,
}

impl TraceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, level: u32) -> PathBuf {
        self.dir.join(format!("trace_lvl{level}.txt"))
    }

    pub fn write(&self, attempt: &GradeAttempt) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(attempt.level);
        fs::write(&path, render_trace(attempt))?;
        log::debug!("Trace for level {} written to {}", attempt.level, path.display());
        Ok(path)
    }
}

pub fn render_trace(attempt: &GradeAttempt) -> String {
    format!("OUTPUT:\n{}\n\nSTDERR:\n{}\n", attempt.stdout, attempt.stderr)
}

/// Mirrors the displayed subject into `{dir}/lvl{N}.txt`
#[derive(Debug, Clone)]
pub struct SubjectExporter {
    dir: PathBuf,
}

impl SubjectExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, level: u32) -> PathBuf {
        self.dir.join(format!("lvl{level}.txt"))
    }

    pub fn export(&self, level: u32, subject: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(level);
        fs::write(&path, format!("{subject}\n"))?;
        Ok(path)
    }
}
