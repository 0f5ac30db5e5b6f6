//! Run configuration
//!
//! Built once at program start from environment variables and passed to the
//! validator explicitly:
//!
//! | Variable                   | Effect                                         |
//! |----------------------------|------------------------------------------------|
//! | `SKIP_MIGRATION_EXECUTION` | don't run the migration command                |
//! | `MIGRATION_COMMAND`        | command line used to apply migrations          |
//! | `SKIP_GIT_CHECK`           | don't check that the schema file changed       |
//! | `MOCK_GIT_DIFF`            | use this text instead of asking git for a diff |
//! | `MIGRATIONS_DIR`           | migrations directory (default `db/migrate`)    |
//! | `SCHEMA_PATH`              | schema snapshot (default `db/schema.rb`)       |
//!
//! A flag counts as set when its value is non-empty, so `SKIP_GIT_CHECK=false`
//! still skips the check.

use std::path::{Path, PathBuf};

use crate::domain::result::{Error, Result};

pub const SKIP_MIGRATION_EXECUTION: &str = "SKIP_MIGRATION_EXECUTION";
pub const MIGRATION_COMMAND: &str = "MIGRATION_COMMAND";
pub const SKIP_GIT_CHECK: &str = "SKIP_GIT_CHECK";
pub const MOCK_GIT_DIFF: &str = "MOCK_GIT_DIFF";
pub const MIGRATIONS_DIR: &str = "MIGRATIONS_DIR";
pub const SCHEMA_PATH: &str = "SCHEMA_PATH";

pub const DEFAULT_MIGRATION_COMMAND: &str = "bundle exec rails db:migrate";
pub const DEFAULT_MIGRATIONS_DIR: &str = "db/migrate";
pub const DEFAULT_SCHEMA_PATH: &str = "db/schema.rb";
pub const DEFAULT_EXTENSION: &str = "rb";

/// Everything a check run needs to know
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    /// Directory the relative paths below are resolved against
    pub root: PathBuf,
    pub migrations_dir: PathBuf,
    /// Schema snapshot, relative to `root`; also the path handed to git
    pub schema_path: PathBuf,
    /// Migration file extension, without the dot
    pub extension: String,
    pub skip_migration_execution: bool,
    pub migration_command: String,
    pub skip_git_check: bool,
    /// Stands in for the git diff output when present
    pub mock_diff_output: Option<String>,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            migrations_dir: PathBuf::from(DEFAULT_MIGRATIONS_DIR),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
            skip_migration_execution: false,
            migration_command: DEFAULT_MIGRATION_COMMAND.to_string(),
            skip_git_check: false,
            mock_diff_output: None,
        }
    }
}

impl RunConfiguration {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            root: defaults.root,
            migrations_dir: non_empty(MIGRATIONS_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.migrations_dir),
            schema_path: non_empty(SCHEMA_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.schema_path),
            extension: defaults.extension,
            skip_migration_execution: non_empty(SKIP_MIGRATION_EXECUTION).is_some(),
            migration_command: non_empty(MIGRATION_COMMAND)
                .unwrap_or(defaults.migration_command),
            skip_git_check: non_empty(SKIP_GIT_CHECK).is_some(),
            // Taken verbatim: an empty mock diff means "schema untouched"
            mock_diff_output: lookup(MOCK_GIT_DIFF),
        }
    }

    /// Run the checks in another directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Reject configurations that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(Error::config("migration file extension must not be empty"));
        }
        Ok(())
    }

    /// Absolute-or-relative path of the migrations directory
    pub fn migrations_path(&self) -> PathBuf {
        resolve(&self.root, &self.migrations_dir)
    }

    /// Base name of the schema snapshot, used in messages
    pub fn schema_file_name(&self) -> String {
        self.schema_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.schema_path.display().to_string())
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
