//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use clap::{Args, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Vipergen is a single-purpose tool, so there are no subcommands: the two
/// positionals are the whole surface, with flags layered on top.  Both
/// positionals are required — clap rejects a missing module name or prefix
/// with a usage error before any side effect happens.
#[derive(Debug, Parser)]
#[command(
    name    = "vipergen",
    bin_name = "vipergen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant VIPER module scaffolding",
    long_about = "Vipergen creates a module directory and writes the four \
                  wired-together role files (Router, Presenter, Interactor, \
                  ViewController) for a VIPER-style feature module.",
    after_help = "EXAMPLES:\n\
        \x20 vipergen Login Login\n\
        \x20 vipergen Settings ST --wiring injected\n\
        \x20 vipergen Profile Profile --author \"Jane Doe\" --dry-run",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The module to generate.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments describing one module generation.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Module directory name, created under the current directory.
    #[arg(value_name = "MODULE", help = "Module directory name")]
    pub module: String,

    /// Type-name prefix for the four generated role files.
    #[arg(
        value_name = "PREFIX",
        help = "Type-name prefix for the generated Router/Presenter/Interactor/ViewController"
    )]
    pub prefix: String,

    /// Wiring style for the Router's module assembly.
    #[arg(
        short = 'w',
        long = "wiring",
        value_name = "STYLE",
        value_enum,
        help = "Wiring style (shared: property-assigned, injected: constructor-injected)"
    )]
    pub wiring: Option<Wiring>,

    /// Author name for the file headers.
    #[arg(
        long = "author",
        value_name = "NAME",
        help = "Author name for file headers (skips the git identity lookup)"
    )]
    pub author: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported wiring styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Wiring {
    Shared,
    Injected,
}

impl std::fmt::Display for Wiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shared => write!(f, "shared"),
            Self::Injected => write!(f, "injected"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
