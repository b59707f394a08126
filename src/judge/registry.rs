use crate::config::types::{ExamError, Result};
use crate::judge::adapter::LanguageAdapter;
use crate::judge::languages::python::PythonAdapter;

pub fn adapter_for(language: &str, interpreter: &str) -> Result<Box<dyn LanguageAdapter>> {
    match language {
        "python" | "py" => Ok(Box::new(PythonAdapter::new(interpreter))),
        _ => Err(ExamError::Config(format!(
            "unsupported language adapter: {language}"
        ))),
    }
}
