//! Validation errors collected during a check run

use std::fmt;

use serde::Serialize;

/// The kinds of problem a check run can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    /// Name does not follow `<14 digits>_<slug>.<ext>`
    BadFilename,
    /// None of the migration entry points appears in the body
    MissingMethod,
    /// Migrations exist but the schema snapshot shows no changes
    SchemaNotUpdated,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::BadFilename => "bad-filename",
            ErrorCategory::MissingMethod => "missing-method",
            ErrorCategory::SchemaNotUpdated => "schema-not-updated",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A soft, accumulated problem found in the migrations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub category: ErrorCategory,
    /// Offending migration file name, if the error is about a single file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn bad_filename(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            category: ErrorCategory::BadFilename,
            message: format!("Invalid filename format: {}", file_name),
            file: Some(file_name),
        }
    }

    pub fn missing_method(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            category: ErrorCategory::MissingMethod,
            message: format!("No migration method found in: {}", file_name),
            file: Some(file_name),
        }
    }

    /// `schema_name` is the snapshot's base name, `hint` the command that regenerates it
    pub fn schema_not_updated(schema_name: &str, hint: &str) -> Self {
        Self {
            category: ErrorCategory::SchemaNotUpdated,
            file: None,
            message: format!(
                "{} has not been updated. Run `{}` and commit changes.",
                schema_name, hint
            ),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
