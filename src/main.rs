//! rpc-doc-samples - code-sample values for RPC API docs
//!
//! Reads the method catalog written by the proto loader and prints the
//! derived values that documentation templates consume.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use rpc_doc_samples::catalog::Catalog;
use rpc_doc_samples::{commands, config, output};

/// Derive code-sample values for RPC API documentation.
#[derive(Parser, Debug)]
#[command(name = "rpc-doc-samples")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to catalog.json (defaults to $RPC_DOCS_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist
    #[arg(long, global = true)]
    fields: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List methods in the catalog
    List {
        /// Only methods of this daemon (e.g., lnd, loop)
        #[arg(short, long)]
        daemon: Option<String>,
    },

    /// Show code-sample values for one method
    Show {
        /// package.Service.Method or Service.Method, optionally prefixed with daemon:
        method: String,
    },

    /// Code-sample values for every matching method
    Samples {
        /// Only methods of this daemon
        #[arg(short, long)]
        daemon: Option<String>,

        /// Only methods of this service
        #[arg(short, long)]
        service: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let output_controls = output::OutputControls {
        json: cli.json,
        compact: cli.compact,
        fields: cli.fields.clone(),
    };

    match run(cli, &output_controls) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if output_controls.json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli, output_controls: &output::OutputControls) -> Result<()> {
    let path = config::resolve_catalog_path(cli.catalog.as_deref());
    let catalog = Catalog::load(&path)
        .with_context(|| format!("Failed to load catalog from {:?}", path))?;

    match cli.command {
        Command::List { daemon } => {
            commands::list::list(&catalog, daemon.as_deref(), output_controls)
        }
        Command::Show { method } => {
            commands::samples::show(&catalog, &method, output_controls)
        }
        Command::Samples { daemon, service } => commands::samples::samples(
            &catalog,
            daemon.as_deref(),
            service.as_deref(),
            output_controls,
        ),
    }
}
