/// Record of one graded submission
use crate::exec::runner::{RunError, RunOutput};
use crate::verdict::classifier::GradeVerdict;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeAttempt {
    pub level: u32,
    pub stdout: String,
    pub stderr: String,
    /// `None` when killed by a signal or never run to completion
    pub exit_code: Option<i32>,
    pub elapsed_ms: u64,
    pub verdict: GradeVerdict,
}

impl GradeAttempt {
    pub fn from_run(
        level: u32,
        run: &Result<RunOutput, RunError>,
        verdict: GradeVerdict,
    ) -> Self {
        match run {
            Ok(output) => Self {
                level,
                stdout: output.captured.stdout.clone(),
                stderr: output.captured.stderr.clone(),
                exit_code: output.exit_code,
                elapsed_ms: output.elapsed.as_millis() as u64,
                verdict,
            },
            Err(err) => Self {
                level,
                stdout: String::new(),
                stderr: err.to_string(),
                exit_code: None,
                elapsed_ms: match err {
                    RunError::Timeout(limit) => limit.as_millis() as u64,
                    _ => 0,
                },
                verdict,
            },
        }
    }

    /// One-line JSON for debug logging
    pub fn to_log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable attempt: {e}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::output::CapturedOutput;
    use std::time::Duration;

    #[test]
    fn test_from_completed_run() {
        let run = Ok(RunOutput {
            captured: CapturedOutput::new("42", "warn"),
            exit_code: Some(0),
            success: true,
            elapsed: Duration::from_millis(35),
            ..Default::default()
        });
        let attempt = GradeAttempt::from_run(2, &run, GradeVerdict::Passed);
        assert_eq!(attempt.stdout, "42");
        assert_eq!(attempt.stderr, "warn");
        assert_eq!(attempt.exit_code, Some(0));
        assert_eq!(attempt.elapsed_ms, 35);
    }

    #[test]
    fn test_from_timeout_records_limit() {
        let run = Err(RunError::Timeout(Duration::from_secs(10)));
        let attempt = GradeAttempt::from_run(5, &run, GradeVerdict::TimedOut);
        assert_eq!(attempt.exit_code, None);
        assert_eq!(attempt.elapsed_ms, 10_000);
        assert!(attempt.stdout.is_empty());
    }

    #[test]
    fn test_log_line_is_json() {
        let attempt = GradeAttempt {
            level: 0,
            stdout: "Hello".to_string(),
            stderr: String::new(),
            exit_code: Some(0),
            elapsed_ms: 12,
            verdict: GradeVerdict::WrongOutput,
        };
        let value: serde_json::Value = serde_json::from_str(&attempt.to_log_line()).unwrap();
        assert_eq!(value["verdict"], "wrong_output");
        assert_eq!(value["level"], 0);
    }
}
