//! Validation service - runs every migration check and aggregates the result
//!
//! A run goes through these steps in order:
//! 1. Discover migrations in the configured directory
//! 2. Check each file's name and body (filename first, then content)
//! 3. Apply migrations with the configured command, unless skipped
//! 4. Ask git whether the schema snapshot changed, unless skipped
//!
//! Problems from steps 2 and 4 are collected in discovery order. Only
//! filesystem and git spawn failures abort the run.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::RunConfiguration;
use crate::domain::result::Result;
use crate::domain::{ErrorCategory, MigrationFile, NamingConvention, ValidationError};
use crate::ports::{CommandRunner, CommandStatus};

use super::checks::{check_content, check_filename};
use super::discovery::discover;

/// What happened to the migration command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Execution {
    Skipped,
    Finished(CommandStatus),
    /// The command could not be spawned; reported, never a validation error
    NotStarted { reason: String },
}

/// Outcome of the schema snapshot check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaCheck {
    /// Disabled by configuration
    Skipped,
    /// Nothing to check because no migrations were found
    NoMigrations,
    Updated,
    NotUpdated,
}

/// Everything a check run found
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub migrations: Vec<MigrationFile>,
    pub errors: Vec<ValidationError>,
    /// Informational lines that do not affect the outcome
    pub notices: Vec<String>,
    pub execution: Execution,
    pub schema_check: SchemaCheck,
}

impl CheckReport {
    /// A run passes if and only if no validation error was collected
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn errors_of(&self, category: ErrorCategory) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.category == category)
    }
}

/// Service that runs the migration checks
pub struct ValidationService<'a> {
    config: &'a RunConfiguration,
    runner: &'a dyn CommandRunner,
}

impl<'a> ValidationService<'a> {
    pub fn new(config: &'a RunConfiguration, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    /// Run all checks
    pub fn run_check(&self) -> Result<CheckReport> {
        self.config.validate()?;
        let convention = NamingConvention::new(&self.config.extension)?;

        let migrations_dir = self.config.migrations_path();
        let migrations = discover(&migrations_dir, &convention)?;
        info!(
            count = migrations.len(),
            dir = %migrations_dir.display(),
            "discovered migrations"
        );

        let mut errors = Vec::new();
        let mut notices = Vec::new();

        for file in &migrations {
            errors.extend(check_filename(file));
            errors.extend(check_content(file));
        }

        let execution = self.execute_migrations();

        let schema_check = if migrations.is_empty() {
            notices.push(format!(
                "No migration files found. Skipping {} check.",
                self.config.schema_file_name()
            ));
            SchemaCheck::NoMigrations
        } else if self.config.skip_git_check {
            info!("schema check skipped by configuration");
            SchemaCheck::Skipped
        } else {
            self.check_schema(&mut errors)?
        };

        if !errors.is_empty() {
            info!(errors = errors.len(), "migration check failed");
        }

        Ok(CheckReport {
            migrations,
            errors,
            notices,
            execution,
            schema_check,
        })
    }

    /// Apply migrations; the exit status is recorded but never judged
    fn execute_migrations(&self) -> Execution {
        if self.config.skip_migration_execution {
            info!("migration execution skipped by configuration");
            return Execution::Skipped;
        }

        let command = &self.config.migration_command;
        if command.trim().is_empty() {
            warn!("migration command is blank, nothing to run");
            return Execution::NotStarted {
                reason: "Migration command is blank".to_string(),
            };
        }
        info!(command = %command, "running migrations");

        match self.runner.run_inherited(command) {
            Ok(status) => {
                if !status.success {
                    warn!(command = %command, code = ?status.code, "migration command failed");
                }
                Execution::Finished(status)
            }
            Err(e) => {
                warn!(error = %e, "migration command could not be started");
                Execution::NotStarted {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn check_schema(&self, errors: &mut Vec<ValidationError>) -> Result<SchemaCheck> {
        let diff = self.schema_diff()?;
        debug!(diff = %diff.trim(), "schema diff");

        if diff.trim().is_empty() {
            errors.push(ValidationError::schema_not_updated(
                &self.config.schema_file_name(),
                &self.config.migration_command,
            ));
            Ok(SchemaCheck::NotUpdated)
        } else {
            Ok(SchemaCheck::Updated)
        }
    }

    /// Names of changed files restricted to the schema path
    fn schema_diff(&self) -> Result<String> {
        if let Some(mock) = &self.config.mock_diff_output {
            debug!("using mocked schema diff");
            return Ok(mock.clone());
        }

        let schema_path = self.config.schema_path.to_string_lossy().into_owned();
        self.runner
            .capture("git", &["diff", "--name-only", "--", schema_path.as_str()])
    }
}
