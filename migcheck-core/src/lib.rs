//! Migration checker core - validates database migrations before merge
//!
//! This crate follows a ports-and-adapters layout:
//!
//! - **domain**: Migration files, naming rules and validation errors
//! - **ports**: The [`CommandRunner`] trait for external processes
//! - **services**: Discovery, per-file checks and the validator
//! - **adapters**: The process-backed [`ShellCommandRunner`]
//! - **config**: [`RunConfiguration`], read once from the environment

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

pub use adapters::ShellCommandRunner;
pub use config::RunConfiguration;
pub use domain::result::{Error, Result};
pub use domain::{ErrorCategory, MigrationFile, ValidationError};
pub use ports::{CommandRunner, CommandStatus};
pub use services::{CheckReport, Execution, SchemaCheck, ValidationService};

/// Run every migration check with the given configuration and runner
pub fn run_check(config: &RunConfiguration, runner: &dyn CommandRunner) -> Result<CheckReport> {
    ValidationService::new(config, runner).run_check()
}
