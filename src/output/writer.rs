//! Persisting the rendered document

use crate::fs::FileSystem;
use anyhow::Result;
use std::path::Path;

/// Creates the parent directories and overwrites `path` with the rendered
/// text. There is no atomic-replace protection; the file is rewritten in
/// full on every run.
pub fn write_rendered<F: FileSystem>(fs: &F, path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent)?;
    }
    fs.write_string(path, content)
}
