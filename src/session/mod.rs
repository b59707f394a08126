//! Interactive exam session: command parsing, rendering and the level state machine.

pub mod command;
pub mod controller;
pub mod display;

pub use command::Command;
pub use controller::{Flow, SessionController};
