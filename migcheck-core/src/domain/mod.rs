//! Core domain entities
//!
//! Pure data structures and naming rules - no process or filesystem
//! access beyond reading a single migration file.

mod migration;
mod validation;
pub mod result;

pub use migration::{MigrationFile, NamingConvention, TIMESTAMP_DIGITS};
pub use validation::{ErrorCategory, ValidationError};
