//! On-disk session state: current level, traces and exported subjects.

pub mod progress;
pub mod trace;

pub use progress::{FileProgressStore, MemoryProgressStore, ProgressStore};
pub use trace::{SubjectExporter, TraceStore};
