//! Per-file migration checks

use crate::domain::{MigrationFile, ValidationError};

/// Literal tokens that mark a migration entry point
///
/// Matched as plain substrings, so a commented-out `def change` still counts.
pub const MIGRATION_METHOD_MARKERS: [&str; 3] = ["def change", "def up", "def down"];

/// Whether a migration body mentions any entry point
pub fn has_migration_method(body: &str) -> bool {
    MIGRATION_METHOD_MARKERS
        .iter()
        .any(|marker| body.contains(marker))
}

/// `bad-filename` if the file breaks the naming convention
pub fn check_filename(file: &MigrationFile) -> Option<ValidationError> {
    if file.is_well_named() {
        None
    } else {
        Some(ValidationError::bad_filename(&file.file_name))
    }
}

/// `missing-method` if the body has no entry point
pub fn check_content(file: &MigrationFile) -> Option<ValidationError> {
    if has_migration_method(&file.body_text) {
        None
    } else {
        Some(ValidationError::missing_method(&file.file_name))
    }
}
