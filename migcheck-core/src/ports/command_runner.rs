//! Command runner port - external process abstraction

use serde::Serialize;

use crate::domain::result::Result;

/// How an inherited-stdio command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandStatus {
    pub success: bool,
    /// Exit code, absent when the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

/// Runs external commands on behalf of the validator
///
/// Every call is one-shot: no retries, no timeouts.
pub trait CommandRunner {
    /// Run a shell command line with the caller's stdout/stderr
    ///
    /// An error means the command could not be started at all.
    fn run_inherited(&self, command_line: &str) -> Result<CommandStatus>;

    /// Run `program` with `args` and return its captured stdout
    fn capture(&self, program: &str, args: &[&str]) -> Result<String>;
}
