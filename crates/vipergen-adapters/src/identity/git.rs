//! Author identity from the ambient git configuration.
//!
//! Wraps the one subprocess this tool spawns. All failure modes (binary
//! missing, non-zero exit, empty or non-UTF-8 output) collapse to `None`;
//! the caller substitutes the fixed fallback identity.

use std::process::Command;

use tracing::debug;

use vipergen_core::application::ports::IdentityProvider;

/// Reads the display name from `git config --global user.name`.
#[derive(Debug, Clone, Copy)]
pub struct GitConfigIdentity;

impl GitConfigIdentity {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitConfigIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for GitConfigIdentity {
    fn display_name(&self) -> Option<String> {
        let output = match Command::new("git")
            .args(["config", "--global", "user.name"])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "git could not be spawned; using fallback identity");
                return None;
            }
        };

        if !output.status.success() {
            debug!(
                status = ?output.status.code(),
                "git config exited non-zero; using fallback identity"
            );
            return None;
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            debug!("git config returned no user.name; using fallback identity");
            None
        } else {
            Some(name)
        }
    }
}
