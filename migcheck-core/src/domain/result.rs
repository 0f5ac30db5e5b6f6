//! Result and error types for the core library
//!
//! These are the fatal errors that stop a run. Problems found in the
//! migrations themselves are [`ValidationError`](super::ValidationError)s
//! and are collected, not returned.

use std::path::PathBuf;

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run `{command}`: {source}")]
    Command {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an I/O error tied to the path being accessed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an error for a command that could not be started
    pub fn command(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Command {
            command: command.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = Error::io(
            "db/migrate/20240101010101_create_users.rb",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("20240101010101_create_users.rb"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_command_error_names_command() {
        let err = Error::command(
            "git diff --name-only",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().starts_with("Failed to run `git diff --name-only`"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("empty migrations directory");
        assert_eq!(err.to_string(), "Configuration error: empty migrations directory");
    }
}
