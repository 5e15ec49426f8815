//! Constant identity provider.

use vipergen_core::application::ports::IdentityProvider;

/// Always resolves to a fixed name. Used for the `--author` override and in
/// tests.
#[derive(Debug, Clone)]
pub struct FixedIdentity(String);

impl FixedIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl IdentityProvider for FixedIdentity {
    fn display_name(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
