/// Verdict classification for one grading attempt
///
/// A pure function over the run result: no I/O, no state.
use crate::exec::runner::{RunError, RunOutput};
use crate::verdict::predicate::GradingPredicate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeVerdict {
    Passed,
    WrongOutput,
    /// Non-zero exit with nothing on stdout; the predicate is not consulted
    RuntimeError,
    TimedOut,
    SolutionMissing,
    /// The interpreter could not be started or waited on
    LaunchFailed,
}

impl GradeVerdict {
    pub fn is_pass(self) -> bool {
        matches!(self, GradeVerdict::Passed)
    }

    /// Whether the candidate process ran to completion and produced a trace
    pub fn has_trace(self) -> bool {
        matches!(
            self,
            GradeVerdict::Passed | GradeVerdict::WrongOutput | GradeVerdict::RuntimeError
        )
    }
}

impl std::fmt::Display for GradeVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeVerdict::Passed => write!(f, "passed"),
            GradeVerdict::WrongOutput => write!(f, "wrong_output"),
            GradeVerdict::RuntimeError => write!(f, "runtime_error"),
            GradeVerdict::TimedOut => write!(f, "timed_out"),
            GradeVerdict::SolutionMissing => write!(f, "solution_missing"),
            GradeVerdict::LaunchFailed => write!(f, "launch_failed"),
        }
    }
}

pub struct VerdictClassifier;

impl VerdictClassifier {
    pub fn classify(
        run: &Result<RunOutput, RunError>,
        predicate: &dyn GradingPredicate,
    ) -> GradeVerdict {
        match run {
            Err(RunError::NotFound(_)) => GradeVerdict::SolutionMissing,
            Err(RunError::Timeout(_)) => GradeVerdict::TimedOut,
            Err(RunError::Spawn { .. } | RunError::Wait(_)) => GradeVerdict::LaunchFailed,
            Ok(output) => Self::classify_output(output, predicate),
        }
    }

    /// A failing process with partial stdout is still graded on that output.
    pub fn classify_output(output: &RunOutput, predicate: &dyn GradingPredicate) -> GradeVerdict {
        if output.crashed_silently() {
            return GradeVerdict::RuntimeError;
        }
        if predicate.evaluate(&output.captured) {
            GradeVerdict::Passed
        } else {
            GradeVerdict::WrongOutput
        }
    }
}
