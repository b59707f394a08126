/// Exam session state machine
///
/// Owns the current level and applies one [`Command`] at a time. Every
/// mutation goes through the progress store before the in-memory level moves.
use crate::config::types::{Result, MAX_LEVEL};
use crate::exec::runner::{ExecutionBackend, RunError};
use crate::registry::{LevelRegistry, NO_HINT};
use crate::session::command::Command;
use crate::session::display;
use crate::state::progress::ProgressStore;
use crate::state::trace::{SubjectExporter, TraceStore};
use crate::verdict::attempt::GradeAttempt;
use crate::verdict::classifier::{GradeVerdict, VerdictClassifier};
use std::io::Write;
use std::path::PathBuf;

/// Whether the command loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct SessionController<'a, S: ProgressStore, B: ExecutionBackend> {
    registry: &'a LevelRegistry,
    store: S,
    backend: B,
    traces: TraceStore,
    subjects: Option<SubjectExporter>,
    level: u32,
}

impl<'a, S: ProgressStore, B: ExecutionBackend> SessionController<'a, S, B> {
    /// Load the persisted level, clamping anything past "all complete"
    pub fn new(registry: &'a LevelRegistry, store: S, backend: B, traces: TraceStore) -> Self {
        let mut controller = Self {
            registry,
            store,
            backend,
            traces,
            subjects: None,
            level: 0,
        };
        controller.level = controller.load_level();
        controller
    }

    /// Mirror every displayed subject into `exporter`'s directory
    pub fn with_subject_exporter(mut self, exporter: SubjectExporter) -> Self {
        self.subjects = Some(exporter);
        self
    }

    fn load_level(&mut self) -> u32 {
        let stored = self.store.get();
        if stored <= MAX_LEVEL + 1 {
            return stored;
        }
        log::warn!(
            "Persisted level {} is past the last level; clamping to {}",
            stored,
            MAX_LEVEL + 1
        );
        if let Err(e) = self.store.set(MAX_LEVEL + 1) {
            log::warn!("Failed to persist clamped level: {}", e);
        }
        MAX_LEVEL + 1
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn prompt(&self) -> String {
        display::prompt(self.level)
    }

    fn set_level(&mut self, level: u32) -> Result<()> {
        self.store.set(level)?;
        log::info!("Level {} -> {}", self.level, level);
        self.level = level;
        Ok(())
    }

    /// Banner, progress and the current subject
    pub fn welcome(&self, out: &mut dyn Write) -> Result<()> {
        display::welcome_banner(out)?;
        display::progress_block(out, self.level, self.registry.topic_of(self.level))?;
        writeln!(out)?;
        self.show_subject(self.level, out)?;
        writeln!(out)?;
        writeln!(out, "{}", display::COMMANDS_LINE)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command, out: &mut dyn Write) -> Result<Flow> {
        log::debug!("Level {}: {:?}", self.level, command);
        match command {
            Command::GradeMe => self.grade_me(out)?,
            Command::Skip => self.skip(out)?,
            Command::Hint => self.hint(out)?,
            Command::Reset => {
                self.set_level(0)?;
                writeln!(out, "Reset to level 0.")?;
                self.show_subject(0, out)?;
            }
            Command::Progress => {
                display::progress_block(out, self.level, self.registry.topic_of(self.level))?;
                writeln!(out)?;
            }
            Command::Exit => {
                self.farewell(out)?;
                return Ok(Flow::Exit);
            }
            Command::Empty => {}
            Command::Unknown(_) => {
                writeln!(
                    out,
                    "Unknown command. Use: grademe | skip | hint | reset | progress | exit"
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Save notice printed on exit, EOF or interrupt
    pub fn farewell(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Progress saved at level {}. See you next time!",
            self.level
        )?;
        Ok(())
    }

    fn show_subject(&self, level: u32, out: &mut dyn Write) -> Result<()> {
        if level > MAX_LEVEL {
            display::completion_banner(out)?;
            return Ok(());
        }
        let subject = self.registry.subject_text(level)?;
        writeln!(out, "{subject}")?;
        if let Some(exporter) = &self.subjects {
            if let Err(e) = exporter.export(level, subject) {
                log::warn!("Failed to export subject for level {}: {}", level, e);
            }
        }
        Ok(())
    }

    fn skip(&mut self, out: &mut dyn Write) -> Result<()> {
        if self.level >= MAX_LEVEL {
            writeln!(out, "Already at the final level.")?;
            return Ok(());
        }
        let next = self.level + 1;
        self.set_level(next)?;
        writeln!(out, "Skipped to level {}: {}", next, self.registry.topic_of(next))?;
        self.show_subject(next, out)
    }

    fn hint(&self, out: &mut dyn Write) -> Result<()> {
        let hints = if self.level > MAX_LEVEL {
            Vec::new()
        } else {
            self.registry.hints(self.level)?
        };
        if hints.is_empty() {
            writeln!(out, "{NO_HINT}")?;
            return Ok(());
        }
        writeln!(out, "\n=== HINT ===")?;
        for hint in hints {
            writeln!(out, "{hint}")?;
        }
        Ok(())
    }

    fn grade_me(&mut self, out: &mut dyn Write) -> Result<()> {
        let level = self.level;
        if level > MAX_LEVEL {
            writeln!(out, "Every level is already passed.")?;
            display::completion_banner(out)?;
            return Ok(());
        }

        let solution = self.backend.solution_path(level);
        if let Some(dir) = solution.parent() {
            std::fs::create_dir_all(dir)?;
        }
        display::grading_header(out, level, self.registry.topic_of(level))?;

        let predicate = self.registry.predicate(level)?;
        let run = self.backend.run(level);
        let verdict = VerdictClassifier::classify(&run, predicate);
        let attempt = GradeAttempt::from_run(level, &run, verdict);
        log::debug!("Attempt {}", attempt.to_log_line());

        let trace = if verdict.has_trace() {
            self.write_trace(&attempt)
        } else {
            None
        };

        match (&run, verdict) {
            (Err(RunError::NotFound(path)), _) => {
                writeln!(out, "\nERROR: {} not found.", path.display())?;
                writeln!(out, "Create your solution there and run 'grademe' again.")?;
            }
            (Err(RunError::Timeout(limit)), _) => {
                writeln!(
                    out,
                    "TIMEOUT: solution ran for more than {} seconds.",
                    limit.as_secs()
                )?;
            }
            (Err(e), _) => {
                writeln!(out, "ERROR running solution: {e}")?;
            }
            (Ok(_), GradeVerdict::RuntimeError) => {
                writeln!(out, "RUNTIME ERROR:\n{}", attempt.stderr)?;
                if let Some(path) = &trace {
                    writeln!(out, "\n  Trace saved: {}", path.display())?;
                }
            }
            (Ok(_), GradeVerdict::Passed) => self.advance(level, out)?,
            (Ok(_), _) => {
                display::failure_report(
                    out,
                    level,
                    &attempt.stdout,
                    &attempt.stderr,
                    trace.as_deref(),
                )?;
            }
        }
        Ok(())
    }

    fn write_trace(&self, attempt: &GradeAttempt) -> Option<PathBuf> {
        match self.traces.write(attempt) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Failed to write trace for level {}: {}", attempt.level, e);
                None
            }
        }
    }

    /// Passing the last level shows the completion banner and leaves the level alone
    fn advance(&mut self, level: u32, out: &mut dyn Write) -> Result<()> {
        display::pass_banner(out, level)?;
        if level >= MAX_LEVEL {
            display::completion_banner(out)?;
            return Ok(());
        }
        let next = level + 1;
        self.set_level(next)?;
        writeln!(
            out,
            "  Advancing to Level {}: {}",
            next,
            self.registry.topic_of(next)
        )?;
        writeln!(out)?;
        self.show_subject(next, out)
    }
}
