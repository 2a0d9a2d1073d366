//! kiln CLI — conditional module inclusion for engine builds.

mod commands;
mod logging;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use commands::plan::Overrides;
use commands::OutputFormat;
use manifest::KilnManifest;

#[derive(Parser)]
#[command(name = "kiln", version, about = "Engine module build orchestrator")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a kiln.toml in the current directory
    Init {
        /// Project name
        name: String,
    },
    /// Decide which modules build for a platform and show the resulting configuration
    Plan {
        /// Platform token (e.g., android, linuxbsd, windows)
        #[arg(long)]
        platform: Option<String>,
        /// Set a build option (KEY=VALUE), may be repeated
        #[arg(long = "set", value_name = "KEY=VALUE")]
        sets: Vec<String>,
        /// Switch a module off, may be repeated
        #[arg(long = "disable-module", value_name = "MODULE")]
        disabled: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List registered modules
    Modules,
    /// Show the documentation class index
    Docs {
        /// Only index modules included for this platform
        #[arg(long)]
        platform: Option<String>,
        /// Check that every class has a source file under this modules root
        #[arg(long, value_name = "MODULES_ROOT")]
        check: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List recognised platform tokens
    Platforms,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: logging unavailable: {e}");
    }

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&cwd, &name),

        Commands::Plan {
            platform,
            sets,
            disabled,
            format,
        } => {
            let manifest = load_manifest_optional(&cwd)?;
            let overrides = Overrides {
                platform: platform.as_deref(),
                sets: &sets,
                disabled: &disabled,
            };
            commands::plan::run(manifest.as_ref(), &overrides, format)
        }

        Commands::Modules => commands::modules::list(),

        Commands::Docs {
            platform,
            check,
            format,
        } => {
            let manifest = load_manifest_optional(&cwd)?;
            commands::docs::run(
                manifest.as_ref(),
                platform.as_deref(),
                check.as_deref(),
                format,
            )
        }

        Commands::Platforms => commands::platforms::list(),
    }
}

/// Try to load a manifest from the current directory upward.
fn load_manifest_optional(cwd: &Path) -> anyhow::Result<Option<KilnManifest>> {
    Ok(KilnManifest::find_and_load(cwd)?.map(|(manifest, dir)| {
        tracing::debug!(dir = %dir.display(), project = %manifest.project.name, "loaded manifest");
        manifest
    }))
}
