//! Execution control
//!
//! Runs candidate solutions in their own process group under a deadline.

pub mod guard;
pub mod interrupt;
pub mod output;
pub mod runner;

pub use output::CapturedOutput;
pub use runner::{ExecutionBackend, RunError, RunOutput, SolutionLayout, SolutionRunner};
