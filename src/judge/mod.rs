//! Language adapters.
//!
//! The runner stays language-agnostic. Adapters define the solution file name,
//! the launch command and the child environment.

pub mod adapter;
pub mod languages;
pub mod registry;

pub use adapter::LanguageAdapter;
pub use registry::adapter_for;
