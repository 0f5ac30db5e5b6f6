//! Adapter implementations
//!
//! - `std::process` for the CommandRunner port

pub mod shell;

pub use shell::ShellCommandRunner;
