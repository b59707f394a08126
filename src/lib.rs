//! pyexam: an interactive, self-paced Python exam
//!
//! Students write one `solution.py` per level; the engine runs it under a
//! wall-clock limit, grades the captured stdout and advances a persisted
//! level counter.
//!
//! # Architecture
//!
//! ## Execution ([`exec`])
//! - [`exec::runner`]: solution layout, process spawn, timeout handling
//! - [`exec::guard`]: process-group termination and reaping
//! - [`exec::output`]: bounded stdout/stderr collection
//!
//! ## Language adapters ([`judge`])
//! - [`judge::languages::python`]: interpreter command and environment
//!
//! ## Grading ([`verdict`])
//! - [`verdict::predicate`]: substring and full-line predicates
//! - [`verdict::classifier`]: run result to verdict
//!
//! ## Content ([`registry`])
//! - [`registry::levels`]: the authored 60-level table
//!
//! ## State ([`state`])
//! - [`state::progress`]: current level persistence
//! - [`state::trace`]: trace and subject files
//!
//! ## Session ([`session`])
//! - [`session::controller`]: command state machine
//!
//! ## Configuration ([`config`])
//! - [`config::types`]: shared constants, config and error types
//! - [`config::loader`]: `exam.json` loading

// Configuration
pub mod config;

// Execution
pub mod exec;

// Language adapters
pub mod judge;

// Grading
pub mod verdict;

// Level content
pub mod registry;

// Persisted state
pub mod state;

// Interactive session
pub mod session;

// Binary entrypoint wiring
pub mod cli;

pub use config::types::{ExamConfig, ExamError, Result, MAX_LEVEL};
