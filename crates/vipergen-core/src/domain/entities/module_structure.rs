use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::Role};

/// Final module structure ready for materialization.
///
/// This is the output of the template rendering process.
/// It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct ModuleStructure {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<RenderedFile>,
}

impl ModuleStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: String) {
        self.files.push(RenderedFile {
            path: path.into(),
            contents,
        });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: String) -> Self {
        self.add_file(path, contents);
        self
    }

    /// The invariant: one file per role, unique relative paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.len() != Role::ALL.len() {
            return Err(DomainError::IncompleteModule {
                expected: Role::ALL.len(),
                actual: self.files.len(),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    /// The module directory all files are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// One rendered file, path relative to the module root.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl RenderedFile {
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn size(&self) -> usize {
        self.contents.len()
    }
}
