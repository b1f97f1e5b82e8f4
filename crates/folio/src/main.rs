//! Folio CLI - documentation site configuration.
//!
//! Provides commands for:
//! - `check`: Load and validate `folio.toml`, report sidebar warnings
//! - `nav`: Print the navigation tree
//! - `config`: Print the loaded configuration as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use commands::{CheckArgs, ConfigArgs, NavArgs};
use output::Output;

/// Folio - documentation site configuration.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configuration and report problems.
    Check(CheckArgs),
    /// Print the navigation tree.
    Nav(NavArgs),
    /// Print the loaded configuration as JSON.
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        log_filter()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Nav(args) => args.execute(&output),
        Commands::Config(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// `RUST_LOG` filter, falling back to WARN so unknown-key warnings show.
fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        // SAFETY: no other test in this crate reads RUST_LOG
        unsafe {
            std::env::remove_var("RUST_LOG");
        }

        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::WARN));
    }
}
