//! File system abstraction for testability

use anyhow::Result;
use std::path::{Path, PathBuf};

mod mock;
mod real;

pub use mock::MockFileSystem;
pub use real::RealFileSystem;

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }
}

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List directory contents
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Overwrite a file with UTF-8 text
    fn write_string(&self, path: &Path, content: &str) -> Result<()>;
}
