//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use vipergen_core::{application::ports::Filesystem, error::VipergenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> VipergenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> VipergenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> vipergen_core::error::VipergenError {
    use vipergen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("a/b");

        let fs = LocalFilesystem::new();
        fs.create_dir_all(&target).unwrap();
        fs.create_dir_all(&target).unwrap();

        assert!(fs.exists(&target));
    }

    #[test]
    fn write_file_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("file.swift");

        let fs = LocalFilesystem::new();
        fs.write_file(&target, "first").unwrap();
        fs.write_file(&target, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("missing/file.swift");

        let fs = LocalFilesystem::new();
        assert!(fs.write_file(&target, "content").is_err());
    }
}
