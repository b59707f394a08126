//! Configuration
//!
//! Engine settings, shared constants and the error type.

pub mod loader;
pub mod types;
