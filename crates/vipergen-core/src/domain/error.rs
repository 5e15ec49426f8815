// ============================================================================
// domain/error.rs - ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("invalid type prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("unknown wiring style: {0}")]
    InvalidWiringStyle(String),

    // ========================================================================
    // Structure Violations
    // ========================================================================
    #[error("Duplicate path in module: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Rendered module is incomplete: expected {expected} files, found {actual}")]
    IncompleteModule { expected: usize, actual: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModuleName { name, reason } => vec![
                format!("Module name '{}' is invalid: {}", name, reason),
                "Use a plain directory name without path separators".into(),
                "Examples: Login, Settings, UserProfile".into(),
            ],
            Self::InvalidPrefix { prefix, reason } => vec![
                format!("Prefix '{}' is invalid: {}", prefix, reason),
                "The prefix becomes a type name in the generated files".into(),
                "Start with a letter, then letters, digits, or underscores".into(),
                "Examples: Login, ST, AppSettings".into(),
            ],
            Self::InvalidWiringStyle(style) => vec![
                format!("'{}' is not a wiring style", style),
                "Supported styles:".into(),
                "  \u{2022} shared   - property-assigned wiring".into(),
                "  \u{2022} injected - constructor-injected wiring".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModuleName { .. }
            | Self::InvalidPrefix { .. }
            | Self::InvalidWiringStyle(_) => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
