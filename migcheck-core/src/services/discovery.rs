//! Migration discovery - non-recursive directory scan

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{MigrationFile, NamingConvention};

/// List migration file paths in `dir`, sorted by file name
///
/// Only regular files with the convention's extension are returned; hidden
/// files and subdirectories are ignored. A missing directory yields nothing.
pub fn list_migration_paths(dir: &Path, convention: &NamingConvention) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "migrations directory not found");
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();

        let hidden = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        let has_extension = path
            .extension()
            .map(|ext| ext == convention.extension())
            .unwrap_or(false);

        if !hidden && has_extension && path.is_file() {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Discover and read every migration in `dir`
pub fn discover(dir: &Path, convention: &NamingConvention) -> Result<Vec<MigrationFile>> {
    list_migration_paths(dir, convention)?
        .iter()
        .map(|path| {
            debug!(file = %path.display(), "reading migration");
            MigrationFile::load(path, convention)
        })
        .collect()
}
