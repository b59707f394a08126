use crate::judge::adapter::LanguageAdapter;
use std::path::Path;

/// Runs `solution.py` with a configurable interpreter.
#[derive(Debug, Clone)]
pub struct PythonAdapter {
    interpreter: String,
}

impl PythonAdapter {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Default for PythonAdapter {
    fn default() -> Self {
        Self::new("python3")
    }
}

impl LanguageAdapter for PythonAdapter {
    fn language(&self) -> &'static str {
        "python"
    }

    fn solution_file(&self) -> &'static str {
        "solution.py"
    }

    fn run_command(&self, source: &Path) -> Vec<String> {
        vec![
            self.interpreter.clone(),
            source.to_string_lossy().to_string(),
        ]
    }

    fn environment(&self) -> Vec<(String, String)> {
        // Graders expect UTF-8 arrows and degree signs regardless of the host locale.
        vec![
            ("PYTHONIOENCODING".to_string(), "utf-8".to_string()),
            ("PYTHONDONTWRITEBYTECODE".to_string(), "1".to_string()),
        ]
    }
}
