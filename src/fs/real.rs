use super::{DirEntry, FileSystem, FileType};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).context(format!("Failed to read directory {:?}", path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = if path.is_file() {
                FileType::File
            } else if path.is_dir() {
                FileType::Directory
            } else {
                FileType::Symlink
            };

            result.push(DirEntry {
                path,
                name,
                file_type,
            });
        }

        Ok(result)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).context(format!("Failed to create directory {:?}", path))
    }

    fn write_string(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).context(format!("Failed to write file {:?}", path))
    }
}
