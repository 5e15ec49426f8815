//! Implementation of the module generation command.
//!
//! Responsibility: translate CLI arguments into a `ModuleSpec`, resolve the
//! ambient inputs (author, date, wiring style), call the core scaffold
//! service, and display results. No business logic lives here.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, instrument};

use vipergen_adapters::{FixedIdentity, GitConfigIdentity, LocalFilesystem, clock};
use vipergen_core::{
    application::{ScaffoldService, ports::IdentityProvider},
    domain::{AuthorIdentity, ModuleSpec, Role, WiringStyle},
};

use crate::{
    cli::{GenerateArgs, Wiring, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the generation command.
///
/// Dispatch sequence:
/// 1. Validate the module name and prefix (before any side effect)
/// 2. Resolve the wiring style (flag > config > default)
/// 3. Resolve the author identity (flag > config > git > fallback)
/// 4. Capture today's date
/// 5. Early-exit if `--dry-run`
/// 6. Execute generation via `ScaffoldService`
/// 7. Print the written files
#[instrument(skip_all, fields(module = %args.module))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate inputs — a named error here means nothing was written.
    let spec = ModuleSpec::new(&args.module, &args.prefix).map_err(CliError::from_domain)?;

    // 2-4. Resolve ambient inputs once, up front.
    let style = resolve_wiring(args.wiring, &config)?;
    let author = resolve_author(args.author.as_deref(), &config);
    let date = clock::today();

    debug!(
        wiring = %style,
        author = %author,
        date = %date,
        "Inputs resolved"
    );

    let output_root = PathBuf::from(".");

    // 5. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create module '{}' with prefix '{}'",
            spec.name(),
            spec.prefix(),
        ))?;
        for role in Role::ALL {
            output.info(&format!(
                "  {}/{}",
                spec.name(),
                role.file_name(spec.prefix())
            ))?;
        }
        return Ok(());
    }

    // 6. Create the adapter and generate
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    output.header(&format!("Creating module '{}'...", spec.name()))?;

    let generated = service
        .generate(&spec, &author, date, style, &output_root)
        .map_err(CliError::Core)?;

    // 7. Success + written files
    output.success(&format!("Module '{}' created!", spec.name()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Files written:")?;
        for file in &generated.files {
            output.print(&format!("  {}", file.display()))?;
        }
    }

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Wiring style: `--wiring` flag wins, then the config default, then
/// [`WiringStyle::default`].
fn resolve_wiring(flag: Option<Wiring>, config: &AppConfig) -> CliResult<WiringStyle> {
    if let Some(wiring) = flag {
        return Ok(convert_wiring(wiring));
    }

    match config.defaults.wiring.as_deref() {
        Some(raw) => WiringStyle::from_str(raw).map_err(CliError::from_domain),
        None => Ok(WiringStyle::default()),
    }
}

/// Author identity: `--author` flag wins, then the config default, then the
/// git global config, then the fixed fallback.
///
/// Lookup failure is recovered silently — it never surfaces to the user.
fn resolve_author(flag: Option<&str>, config: &AppConfig) -> AuthorIdentity {
    let provider: Box<dyn IdentityProvider> = match flag.or(config.defaults.author.as_deref()) {
        Some(name) => Box::new(FixedIdentity::new(name)),
        None => Box::new(GitConfigIdentity::new()),
    };

    provider
        .display_name()
        .map(AuthorIdentity::new)
        .unwrap_or_else(AuthorIdentity::fallback)
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_wiring(wiring: Wiring) -> WiringStyle {
    match wiring {
        Wiring::Shared => WiringStyle::Shared,
        Wiring::Injected => WiringStyle::Injected,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
