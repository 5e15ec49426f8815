//! Domain value objects: Role, WiringStyle, AuthorIdentity, HeaderDate.
//!
//! # Design
//!
//! These are pure value types — `Copy` where possible, equality-by-value,
//! no identity. They hold NO rendering logic. The fixed template text lives
//! in `entities::template`. This file's only job is to define the types,
//! their string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension of every emitted file.
///
/// The payload is inert UIKit-flavoured source text; this tool never
/// compiles it, so the extension is a fixed constant rather than a choice.
pub const SOURCE_EXTENSION: &str = "swift";

// ── Role ─────────────────────────────────────────────────────────────────────

/// One of the four fixed architectural participants generated per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Router,
    Presenter,
    Interactor,
    ViewController,
}

impl Role {
    /// All roles, in the order their files are written.
    pub const ALL: [Role; 4] = [
        Role::Router,
        Role::Presenter,
        Role::Interactor,
        Role::ViewController,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Router => "Router",
            Self::Presenter => "Presenter",
            Self::Interactor => "Interactor",
            Self::ViewController => "ViewController",
        }
    }

    /// File name for this role under a prefix, e.g. `LoginRouter.swift`.
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{prefix}{}.{SOURCE_EXTENSION}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WiringStyle ───────────────────────────────────────────────────────────────

/// How the Router's wire-up procedure connects the four participants.
///
/// `Shared` is the older property-assigned variant and the default;
/// `Injected` passes collaborators through initialisers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WiringStyle {
    #[default]
    Shared,
    Injected,
}

impl WiringStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Injected => "injected",
        }
    }
}

impl fmt::Display for WiringStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WiringStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shared" => Ok(Self::Shared),
            "injected" => Ok(Self::Injected),
            other => Err(DomainError::InvalidWiringStyle(other.to_string())),
        }
    }
}

// ── AuthorIdentity ────────────────────────────────────────────────────────────

/// Fixed fallback when no identity can be resolved from the environment.
pub const FALLBACK_AUTHOR: &str = "VIPERGEN";

/// Display name embedded in generated file headers.
///
/// Resolved once per run through the `IdentityProvider` port and passed
/// down as a plain value; the domain never performs the lookup itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorIdentity(String);

impl AuthorIdentity {
    /// Build an identity from a resolved name.
    ///
    /// Whitespace is trimmed; a blank name degrades to the fallback so a
    /// misconfigured environment can never produce an empty header field.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            Self::fallback()
        } else {
            Self(name)
        }
    }

    /// The fixed placeholder identity.
    pub fn fallback() -> Self {
        Self(FALLBACK_AUTHOR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── HeaderDate ────────────────────────────────────────────────────────────────

/// Calendar date embedded in generated file headers.
///
/// Captured once at startup by the caller; the domain only formats it.
/// Year is 4-digit, month and day are zero-padded to 2 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HeaderDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn year_str(&self) -> String {
        format!("{:04}", self.year)
    }

    pub fn month_str(&self) -> String {
        format!("{:02}", self.month)
    }

    pub fn day_str(&self) -> String {
        format!("{:02}", self.day)
    }
}

impl fmt::Display for HeaderDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.day_str(), self.month_str(), self.year_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_file_names() {
        assert_eq!(Role::Router.file_name("Login"), "LoginRouter.swift");
        assert_eq!(
            Role::ViewController.file_name("ST"),
            "STViewController.swift"
        );
    }

    #[test]
    fn role_order_is_stable() {
        let names: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(
            names,
            ["Router", "Presenter", "Interactor", "ViewController"]
        );
    }

    #[test]
    fn wiring_style_parses() {
        assert_eq!(WiringStyle::from_str("shared").unwrap(), WiringStyle::Shared);
        assert_eq!(
            WiringStyle::from_str("INJECTED").unwrap(),
            WiringStyle::Injected
        );
        assert!(WiringStyle::from_str("magic").is_err());
    }

    #[test]
    fn wiring_style_default_is_shared() {
        assert_eq!(WiringStyle::default(), WiringStyle::Shared);
    }

    #[test]
    fn blank_author_falls_back() {
        assert_eq!(AuthorIdentity::new("  ").as_str(), FALLBACK_AUTHOR);
        assert_eq!(AuthorIdentity::new("").as_str(), FALLBACK_AUTHOR);
    }

    #[test]
    fn author_is_trimmed() {
        assert_eq!(AuthorIdentity::new(" Jane Doe \n").as_str(), "Jane Doe");
    }

    #[test]
    fn header_date_zero_pads() {
        let date = HeaderDate::new(2026, 8, 7);
        assert_eq!(date.year_str(), "2026");
        assert_eq!(date.month_str(), "08");
        assert_eq!(date.day_str(), "07");
        assert_eq!(date.to_string(), "07.08.2026");
    }
}
