//! Docver CLI
//!
//! Maintains versioned-documentation publish directories: convenience
//! links, the version manifest, and the root redirect.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for docver.
#[derive(Parser)]
#[command(
    name = "docver",
    version,
    about = "Versioned documentation publishing toolkit"
)]
struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Update links, manifest, and redirect in a publish directory
    Update {
        /// Publish directory (e.g. a gh-pages checkout)
        dir: std::path::PathBuf,
    },
    /// Report what a publish directory would advertise, without writing
    Check {
        /// Publish directory
        dir: std::path::PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    docver::init_tracing(cli.verbose);

    match cli.command {
        Commands::Update { dir } => {
            docver::cmd::update::run(cli.config.as_deref(), &dir)?;
        }
        Commands::Check { dir } => {
            docver::cmd::check::run(cli.config.as_deref(), &dir)?;
        }
    }

    Ok(())
}
