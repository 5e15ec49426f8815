//! The caller-supplied description of one module to generate.

use crate::domain::error::DomainError;

/// Validated `(module name, type prefix)` pair for one invocation.
///
/// Both fields are checked at construction — absence or malformed shape is
/// a named error before any side effect, never a downstream crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    name: String,
    prefix: String,
}

impl ModuleSpec {
    /// Validate and build a module spec.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let prefix = prefix.into();

        validate_module_name(&name)?;
        validate_prefix(&prefix)?;

        Ok(Self { name, prefix })
    }

    /// Target directory name, relative to the working directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// String prepended to each role name to form type and file names.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

fn validate_module_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidModuleName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(DomainError::InvalidModuleName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidModuleName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

fn validate_prefix(prefix: &str) -> Result<(), DomainError> {
    if prefix.is_empty() {
        return Err(DomainError::InvalidPrefix {
            prefix: prefix.into(),
            reason: "prefix cannot be empty".into(),
        });
    }

    // The prefix is spliced into type names in the emitted text, so it must
    // itself be a valid identifier head.
    match prefix.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => {
            return Err(DomainError::InvalidPrefix {
                prefix: prefix.into(),
                reason: "prefix must start with a letter".into(),
            });
        }
    }
    if let Some(bad) = prefix.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(DomainError::InvalidPrefix {
            prefix: prefix.into(),
            reason: format!("prefix cannot contain '{bad}'"),
        });
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_specs_pass() {
        for (name, prefix) in [("Login", "Login"), ("Settings", "ST"), ("user", "App_V2")] {
            assert!(ModuleSpec::new(name, prefix).is_ok(), "failed for: {name}/{prefix}");
        }
    }

    #[test]
    fn empty_module_name_is_invalid() {
        assert!(matches!(
            ModuleSpec::new("", "Login"),
            Err(DomainError::InvalidModuleName { .. })
        ));
    }

    #[test]
    fn dotfile_module_name_is_invalid() {
        assert!(matches!(
            ModuleSpec::new(".hidden", "Login"),
            Err(DomainError::InvalidModuleName { .. })
        ));
    }

    #[test]
    fn path_separator_in_module_name_is_invalid() {
        assert!(ModuleSpec::new("a/b", "Login").is_err());
        assert!(ModuleSpec::new("a\\b", "Login").is_err());
    }

    #[test]
    fn empty_prefix_is_invalid() {
        assert!(matches!(
            ModuleSpec::new("Login", ""),
            Err(DomainError::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn prefix_must_start_with_letter() {
        assert!(ModuleSpec::new("Login", "1Login").is_err());
        assert!(ModuleSpec::new("Login", "_Login").is_err());
    }

    #[test]
    fn prefix_rejects_punctuation() {
        let err = ModuleSpec::new("Login", "Log-in").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPrefix { .. }));
    }
}
