//! Integration tests for vipergen-core.
//!
//! The filesystem port is satisfied by a small in-test recording adapter so
//! the full generate workflow runs without touching disk.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use vipergen_core::{
    application::{ScaffoldService, ports::Filesystem},
    domain::{AuthorIdentity, HeaderDate, ModuleSpec, WiringStyle},
    error::VipergenResult,
};

/// Recording filesystem double.
#[derive(Debug, Clone, Default)]
struct RecordingFilesystem {
    inner: Arc<RwLock<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl RecordingFilesystem {
    fn new() -> Self {
        Self::default()
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }
}

impl Filesystem for RecordingFilesystem {
    fn create_dir_all(&self, path: &Path) -> VipergenResult<()> {
        self.inner
            .write()
            .unwrap()
            .directories
            .insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> VipergenResult<()> {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn generate(style: WiringStyle) -> (RecordingFilesystem, Vec<PathBuf>) {
    let filesystem = RecordingFilesystem::new();
    let service = ScaffoldService::new(Box::new(filesystem.clone()));

    let spec = ModuleSpec::new("Login", "Login").unwrap();
    let generated = service
        .generate(
            &spec,
            &AuthorIdentity::new("Test Author"),
            HeaderDate::new(2026, 8, 7),
            style,
            "/output",
        )
        .unwrap();

    (filesystem, generated.files)
}

#[test]
fn full_generate_workflow_writes_four_files() {
    let (filesystem, files) = generate(WiringStyle::Shared);

    assert!(filesystem.exists("/output/Login".as_ref()));
    assert_eq!(filesystem.file_count(), 4);
    assert_eq!(
        files,
        [
            PathBuf::from("/output/Login/LoginRouter.swift"),
            PathBuf::from("/output/Login/LoginPresenter.swift"),
            PathBuf::from("/output/Login/LoginInteractor.swift"),
            PathBuf::from("/output/Login/LoginViewController.swift"),
        ]
    );
}

#[test]
fn written_contents_carry_the_prefix_and_no_placeholders() {
    let (filesystem, files) = generate(WiringStyle::Shared);

    for path in &files {
        let contents = filesystem.read_file(path).unwrap();
        assert!(contents.contains("Login"), "missing prefix in {path:?}");
        assert!(!contents.contains("{{"), "placeholder left in {path:?}");
    }
}

#[test]
fn router_wireup_references_the_other_roles() {
    let (filesystem, _) = generate(WiringStyle::Shared);

    let router = filesystem
        .read_file("/output/Login/LoginRouter.swift".as_ref())
        .unwrap();
    assert!(router.contains("LoginPresenter"));
    assert!(router.contains("LoginInteractor"));
    assert!(router.contains("LoginViewController"));
}

#[test]
fn rerun_is_idempotent_at_the_file_level() {
    let filesystem = RecordingFilesystem::new();
    let service = ScaffoldService::new(Box::new(filesystem.clone()));
    let spec = ModuleSpec::new("Login", "Login").unwrap();

    for _ in 0..2 {
        service
            .generate(
                &spec,
                &AuthorIdentity::new("Test Author"),
                HeaderDate::new(2026, 8, 7),
                WiringStyle::Shared,
                "/output",
            )
            .unwrap();
    }

    assert_eq!(filesystem.file_count(), 4);
}

#[test]
fn injected_wiring_produces_the_constructor_variant() {
    let (filesystem, _) = generate(WiringStyle::Injected);

    let router = filesystem
        .read_file("/output/Login/LoginRouter.swift".as_ref())
        .unwrap();
    assert!(router.contains("assembleModule"));
    assert!(!router.contains("setupModule"));
}

#[test]
fn first_write_failure_propagates_without_rollback() {
    /// Fails every write after the first.
    #[derive(Clone)]
    struct FlakyFilesystem {
        inner: RecordingFilesystem,
        writes: Arc<RwLock<usize>>,
    }

    impl Filesystem for FlakyFilesystem {
        fn create_dir_all(&self, path: &Path) -> VipergenResult<()> {
            self.inner.create_dir_all(path)
        }

        fn write_file(&self, path: &Path, content: &str) -> VipergenResult<()> {
            let mut writes = self.writes.write().unwrap();
            if *writes >= 1 {
                return Err(vipergen_core::application::ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into());
            }
            *writes += 1;
            self.inner.write_file(path, content)
        }

        fn exists(&self, path: &Path) -> bool {
            self.inner.exists(path)
        }
    }

    let flaky = FlakyFilesystem {
        inner: RecordingFilesystem::new(),
        writes: Arc::new(RwLock::new(0)),
    };
    let service = ScaffoldService::new(Box::new(flaky.clone()));
    let spec = ModuleSpec::new("Login", "Login").unwrap();

    let result = service.generate(
        &spec,
        &AuthorIdentity::fallback(),
        HeaderDate::new(2026, 8, 7),
        WiringStyle::Shared,
        "/output",
    );

    assert!(result.is_err());
    // The file written before the failure is left in place.
    assert_eq!(flaky.inner.file_count(), 1);
}
