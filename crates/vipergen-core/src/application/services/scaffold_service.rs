//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Render the four role files from the fixed templates
//! 2. Create the module directory
//! 3. Write each file
//!
//! It implements the driving port (incoming) and uses the driven
//! `Filesystem` port (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{AuthorIdentity, HeaderDate, ModuleSpec, WiringStyle, render_module},
    error::VipergenResult,
};

/// Summary of one completed generation, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// The module directory that was created (or reused).
    pub root: PathBuf,
    /// Full paths of the files written, in write order.
    pub files: Vec<PathBuf>,
}

/// Main scaffolding service.
///
/// Orchestrates rendering and writing for one module.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate one module.
    ///
    /// Side effects, in fixed order: create the module directory (silently
    /// reused when present), then write the four files sequentially,
    /// overwriting existing files. Writes are not transactional — the first
    /// failure propagates and files already written remain on disk.
    #[instrument(
        skip_all,
        fields(
            module = %spec.name(),
            prefix = %spec.prefix(),
            wiring = %style,
        )
    )]
    pub fn generate(
        &self,
        spec: &ModuleSpec,
        author: &AuthorIdentity,
        date: HeaderDate,
        style: WiringStyle,
        output_root: impl AsRef<Path>,
    ) -> VipergenResult<GeneratedModule> {
        info!("Generating {} wiring module", style);

        // 1. Render (pure - no side effects yet)
        let structure = render_module(spec, author, date, style, output_root.as_ref())
            .map_err(crate::error::VipergenError::Domain)?;

        // 2. Create the module directory
        if self.filesystem.exists(structure.root()) {
            debug!(
                path = %structure.root().display(),
                "module directory already exists; files will be overwritten"
            );
        }
        self.filesystem.create_dir_all(structure.root())?;

        // 3. Write each file
        let mut written = Vec::with_capacity(structure.file_count());
        for file in structure.files() {
            let path = structure.root().join(&file.path);
            self.filesystem.write_file(&path, &file.contents)?;
            debug!(path = %path.display(), bytes = file.size(), "file written");
            written.push(path);
        }

        info!(files = written.len(), "Module generated successfully");

        Ok(GeneratedModule {
            root: structure.root().to_path_buf(),
            files: written,
        })
    }
}
