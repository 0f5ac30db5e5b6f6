//! Service layer - the migration checks themselves

pub mod checks;
pub mod discovery;
mod validator;

pub use checks::{check_content, check_filename, has_migration_method, MIGRATION_METHOD_MARKERS};
pub use discovery::{discover, list_migration_paths};
pub use validator::{CheckReport, Execution, SchemaCheck, ValidationService};
