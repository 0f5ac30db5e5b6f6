//! Migration file domain model

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use super::result::{Error, Result};

/// Number of digits in a migration's timestamp prefix (YYYYMMDDHHMMSS)
pub const TIMESTAMP_DIGITS: usize = 14;

/// Filename convention for migrations: `<14 digits>_<slug>.<extension>`
///
/// Fixed-width timestamps make lexicographic order equal chronological
/// order, which the migration runner relies on.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    extension: String,
    pattern: Regex,
}

impl NamingConvention {
    /// Build the convention for files with the given extension (without the dot)
    pub fn new(extension: &str) -> Result<Self> {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(Error::config("migration file extension must not be empty"));
        }

        // [0-9] rather than \d: Unicode digits would break the ordering guarantee
        let pattern = Regex::new(&format!(
            r"^([0-9]{{{}}})_(.+)\.{}$",
            TIMESTAMP_DIGITS,
            regex::escape(extension)
        ))
        .map_err(|e| Error::config(format!("invalid filename pattern: {}", e)))?;

        Ok(Self {
            extension: extension.to_string(),
            pattern,
        })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether a base name follows the convention
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// Split a conforming base name into (timestamp prefix, descriptive slug)
    pub fn parse(&self, file_name: &str) -> Option<(String, String)> {
        let caps = self.pattern.captures(file_name)?;
        Some((caps[1].to_string(), caps[2].to_string()))
    }
}

/// A migration discovered on disk
///
/// Read once at the start of a run and never modified.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationFile {
    pub path: PathBuf,
    pub file_name: String,
    /// `None` when the name does not follow the convention
    pub timestamp_prefix: Option<String>,
    pub descriptive_slug: Option<String>,
    #[serde(skip)]
    pub body_text: String,
}

impl MigrationFile {
    /// Build a migration from a name and body already in memory
    pub fn new(
        path: impl Into<PathBuf>,
        body_text: impl Into<String>,
        convention: &NamingConvention,
    ) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (timestamp_prefix, descriptive_slug) = match convention.parse(&file_name) {
            Some((ts, slug)) => (Some(ts), Some(slug)),
            None => (None, None),
        };

        Self {
            path,
            file_name,
            timestamp_prefix,
            descriptive_slug,
            body_text: body_text.into(),
        }
    }

    /// Read a migration file from disk
    ///
    /// Invalid UTF-8 is replaced rather than rejected; only the markers matter.
    pub fn load(path: &Path, convention: &NamingConvention) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(path, String::from_utf8_lossy(&bytes), convention))
    }

    /// Whether the file name follows the naming convention
    pub fn is_well_named(&self) -> bool {
        self.timestamp_prefix.is_some()
    }
}
