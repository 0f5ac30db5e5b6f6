//! Output formatting utilities
//!
//! Report lines go to stdout so CI logs keep them in order with the
//! migration command's own output.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", format!("✅ {}", msg).green());
}

/// Print a validation problem
pub fn problem(msg: &str) {
    println!("{}", format!("❌ {}", msg).red());
}

/// Print a fatal error
pub fn error(msg: &str) {
    eprintln!("{}", format!("Error: {}", msg).red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", format!("⚠️  {}", msg).yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", format!("ℹ️  {}", msg).cyan());
}

/// Print a section header
pub fn header(msg: &str) {
    println!("{}", format!("=== {} ===", msg).bold());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
