//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `vipergen-adapters` crate provides implementations.

use crate::error::VipergenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `vipergen_adapters::filesystem::LocalFilesystem` (production)
/// - `vipergen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds silently when the directory already exists.
    fn create_dir_all(&self, path: &Path) -> VipergenResult<()>;

    /// Write content to a file, overwriting any existing file at that path.
    fn write_file(&self, path: &Path, content: &str) -> VipergenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for resolving the author identity embedded in file headers.
///
/// Implemented by:
/// - `vipergen_adapters::identity::GitConfigIdentity` (subprocess lookup)
/// - `vipergen_adapters::identity::FixedIdentity` (constant, tests/fallback)
///
/// ## Design Notes
///
/// Lookup failure is not an error at this seam: the provider returns `None`
/// and the caller substitutes the fixed fallback. The subprocess is never
/// spawned mid-render — callers resolve once at startup and pass the result
/// down as a plain `AuthorIdentity` value.
pub trait IdentityProvider: Send + Sync {
    /// Display name from the ambient environment, or `None` when
    /// unavailable (command missing, non-zero exit, empty output).
    fn display_name(&self) -> Option<String>;
}
