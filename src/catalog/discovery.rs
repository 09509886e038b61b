//! Locating service declaration files in the catalog tree

use crate::config::CatalogConfig;
use crate::fs::{FileSystem, FileType};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Finds the declaration file of every service directory under the catalog.
///
/// Immediate child directories of the services directory are candidates,
/// except those whose name starts with the reserved prefix. A candidate is
/// included only when it actually contains a declaration file. The result
/// is sorted by path so repeated runs see the same order.
///
/// A missing services directory is not an error: it is logged and yields
/// an empty result.
pub fn find_declaration_files<F: FileSystem>(
    fs: &F,
    base: &Path,
    config: &CatalogConfig,
) -> Vec<PathBuf> {
    let services_dir = base.join(&config.services_dir);

    if !fs.is_dir(&services_dir) {
        warn!(path = %services_dir.display(), "services directory not found");
        return Vec::new();
    }

    let entries = match fs.read_dir(&services_dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %services_dir.display(), error = %err, "failed to list services directory");
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        if entry.file_type() != FileType::Directory {
            continue;
        }
        if entry.file_name().starts_with(&config.reserved_prefix) {
            continue;
        }

        let declaration = entry.path().join(&config.declaration_file);
        if fs.is_file(&declaration) {
            files.push(declaration);
        }
    }

    files.sort();
    files
}
