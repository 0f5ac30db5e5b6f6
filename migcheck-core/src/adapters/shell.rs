//! Shell command runner - real processes via `std::process`

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::ports::{CommandRunner, CommandStatus};

/// Runs commands in a working directory using the platform shell
pub struct ShellCommandRunner {
    working_dir: PathBuf,
    stdout_to_stderr: bool,
}

impl ShellCommandRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            stdout_to_stderr: false,
        }
    }

    /// Send inherited-stdio commands' stdout to our stderr
    ///
    /// Keeps stdout clean when it carries machine-readable output.
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn shell_command(command_line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command_line]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command_line]);
            cmd
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run_inherited(&self, command_line: &str) -> Result<CommandStatus> {
        debug!(command = command_line, dir = %self.working_dir.display(), "spawning command");

        let mut cmd = Self::shell_command(command_line);
        cmd.current_dir(&self.working_dir);
        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(std::io::stderr()));
        }

        let status = cmd
            .status()
            .map_err(|e| Error::command(command_line, e))?;

        Ok(if status.success() {
            CommandStatus::success()
        } else {
            CommandStatus::failed(status.code())
        })
    }

    fn capture(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!(program, ?args, dir = %self.working_dir.display(), "capturing command output");

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Error::command(format!("{} {}", program, args.join(" ")), e))?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
