//! # hubnet CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hubnet_cli::dispatch::{run_dispatch, DispatchArgs};
use hubnet_cli::network::{run_network, NetworkArgs};

/// hubnet: delivery network analysis and priority dispatch.
#[derive(Parser, Debug)]
#[command(name = "hubnet", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect a delivery network (adjacency, reachability, cycles, shortest paths).
    Network(NetworkArgs),

    /// Schedule and release a batch of delivery requests.
    Dispatch(DispatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("hubnet CLI starting");

    let result = match cli.command {
        Commands::Network(args) => run_network(&args),
        Commands::Dispatch(args) => run_dispatch(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
