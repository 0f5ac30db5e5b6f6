//! Port definitions
//!
//! The validator talks to the outside world (the migration runner and git)
//! only through these traits.

mod command_runner;

pub use command_runner::{CommandRunner, CommandStatus};
