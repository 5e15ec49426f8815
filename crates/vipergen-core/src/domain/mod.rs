// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Vipergen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (filesystem writes, identity lookup) are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, subprocess, or clock calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    module_spec::ModuleSpec,
    module_structure::{ModuleStructure, RenderedFile},
    template::{RenderContext, render_module, role_body},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    AuthorIdentity, FALLBACK_AUTHOR, HeaderDate, Role, SOURCE_EXTENSION, WiringStyle,
};
