use crate::config::types::ExamConfig;
use crate::exec::interrupt;
use crate::exec::runner::SolutionRunner;
use crate::registry::LevelRegistry;
use crate::session::{Command, Flow, SessionController};
use crate::state::progress::FileProgressStore;
use crate::state::trace::{SubjectExporter, TraceStore};
use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive graded Python exam", long_about = None)]
struct Cli {
    /// Working root holding progress, solutions and traces
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// JSON config file (defaults to <root>/exam.json when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Interpreter used to run solutions
    #[arg(long)]
    interpreter: Option<String>,
    /// Wall-clock limit per run in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

fn build_config(cli: &Cli) -> Result<ExamConfig> {
    let mut config = ExamConfig::load_or_default(&cli.root, cli.config.as_deref())?;
    if let Some(interpreter) = &cli.interpreter {
        config.interpreter = interpreter.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    config.validate()?;
    Ok(config)
}

fn prepare_directories(config: &ExamConfig) -> Result<()> {
    for dir in [config.subjects_path(), config.rendu_path(), config.traces_path()] {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

pub fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    log::debug!("Effective config: {:?}", config);
    prepare_directories(&config)?;

    let registry = LevelRegistry::with_solution_dir(&config.rendu_path());
    registry.validate()?;

    let runner = SolutionRunner::from_config(&config)?;
    let store = FileProgressStore::new(config.level_file_path());
    let mut session = SessionController::new(
        &registry,
        store,
        runner,
        TraceStore::new(config.traces_path()),
    )
    .with_subject_exporter(SubjectExporter::new(config.subjects_path()));

    interrupt::install_handlers().context("Failed to install signal handlers")?;

    let mut out = std::io::stdout();
    session.welcome(&mut out)?;
    out.flush()?;

    let mut editor = DefaultEditor::new().context("Failed to initialise line editor")?;
    loop {
        match editor.readline(&session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let flow = session.execute(Command::parse(&line), &mut out)?;
                out.flush()?;
                if flow == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                writeln!(out)?;
                session.farewell(&mut out)?;
                break;
            }
            Err(e) => return Err(e).context("Failed to read command"),
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "py-exam",
            "--root",
            dir.path().to_str().unwrap(),
            "--interpreter",
            "/usr/bin/python3.12",
            "--timeout",
            "3",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.interpreter, "/usr/bin/python3.12");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from(["py-exam", "--root", dir.path().to_str().unwrap(), "--timeout", "0"]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_prepare_directories_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExamConfig::with_root(dir.path());
        prepare_directories(&config).unwrap();
        for name in ["py_subjects", "py_rendu", "py_traces"] {
            assert!(dir.path().join(name).is_dir(), "{name} missing");
        }
    }
}
