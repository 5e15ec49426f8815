//! Vipergen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Vipergen
//! VIPER-module scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          vipergen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, IdentityProvider) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    vipergen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, GitConfigIdentity, …) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ModuleSpec, Role, templates, render)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vipergen_core::{
//!     application::ScaffoldService,
//!     domain::{AuthorIdentity, HeaderDate, ModuleSpec, WiringStyle},
//! };
//!
//! # fn run(filesystem: Box<dyn vipergen_core::application::Filesystem>) {
//! // 1. Validate inputs
//! let spec = ModuleSpec::new("Login", "Login").unwrap();
//!
//! // 2. Use application service (with injected adapter)
//! let service = ScaffoldService::new(filesystem);
//! service
//!     .generate(
//!         &spec,
//!         &AuthorIdentity::new("Jane Doe"),
//!         HeaderDate::new(2026, 8, 7),
//!         WiringStyle::Shared,
//!         ".",
//!     )
//!     .unwrap();
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratedModule, ScaffoldService,
        ports::{Filesystem, IdentityProvider},
    };
    pub use crate::domain::{
        AuthorIdentity, HeaderDate, ModuleSpec, ModuleStructure, RenderContext, RenderedFile,
        Role, WiringStyle, render_module,
    };
    pub use crate::error::{VipergenError, VipergenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
