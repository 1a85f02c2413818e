//! # Network Subcommand
//!
//! Read-only inspection of a network file.
//!
//! - `show`: adjacency list.
//! - `reach --from <hub>`: BFS levels and unreachable hubs.
//! - `cycles`: first cycle found, if any.
//! - `paths --from <hub>`: shortest travel time and route to every hub.
//!
//! `--json` prints the result as JSON instead of text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hubnet_graph::{DeliveryNetwork, Reachability, ShortestPaths};

use crate::config::NetworkConfig;

/// Arguments for `hubnet network`.
#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// Path to the network YAML file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: NetworkCommand,
}

/// Network subcommands.
#[derive(Subcommand, Debug)]
pub enum NetworkCommand {
    /// Print the adjacency list.
    Show,
    /// Hop distances from a hub.
    Reach {
        /// Source hub.
        #[arg(long)]
        from: String,
    },
    /// Report the first cycle found.
    Cycles,
    /// Shortest travel times from a hub.
    Paths {
        /// Source hub.
        #[arg(long)]
        from: String,
    },
}

/// Execute the network subcommand.
pub fn run_network(args: &NetworkArgs) -> Result<u8> {
    let path = args
        .config
        .as_deref()
        .context("--config <PATH> is required")?;
    let network = NetworkConfig::load(path)?
        .build_network()
        .with_context(|| format!("invalid network in {}", path.display()))?;
    tracing::info!(
        hubs = network.vertex_count(),
        routes = network.edge_count(),
        "network loaded"
    );

    match &args.command {
        NetworkCommand::Show => {
            if args.json {
                let adjacency: Vec<_> = network
                    .labels()
                    .map(|hub| {
                        let routes: Vec<_> = network
                            .neighbors(hub.as_str())
                            .unwrap_or_default()
                            .into_iter()
                            .map(|(to, w)| serde_json::json!({ "to": to, "travel_time": w }))
                            .collect();
                        serde_json::json!({ "hub": hub, "routes": routes })
                    })
                    .collect();
                print_json(&adjacency)?;
            } else {
                println!("{network}");
            }
        }
        NetworkCommand::Reach { from } => {
            let reach = network.bfs(from)?;
            if args.json {
                print_json(&reach)?;
            } else {
                print!("{}", render_reachability(&reach));
            }
        }
        NetworkCommand::Cycles => {
            let report = network.detect_cycle();
            if args.json {
                print_json(&report)?;
            } else if report.found {
                let chain: Vec<&str> = report.cycle.iter().map(|h| h.as_str()).collect();
                println!("Cycle found: {}", chain.join(" -> "));
            } else {
                println!("No cycle found");
            }
        }
        NetworkCommand::Paths { from } => {
            let paths = network.dijkstra(from)?;
            if args.json {
                print_json(&paths)?;
            } else {
                print!("{}", render_paths(&network, &paths));
            }
        }
    }
    Ok(0)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Text rendering of BFS levels, grouped by level.
pub fn render_reachability(reach: &Reachability) -> String {
    let mut out = format!("BFS from {}\n", reach.source);
    for level in 0..=reach.depth() {
        let hubs: Vec<&str> = reach
            .levels
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.hub.as_str())
            .collect();
        if !hubs.is_empty() {
            out.push_str(&format!("  level {level}: {}\n", hubs.join(" ")));
        }
    }
    if !reach.unreachable.is_empty() {
        let hubs: Vec<&str> = reach.unreachable.iter().map(|h| h.as_str()).collect();
        out.push_str(&format!("  unreachable: {}\n", hubs.join(" ")));
    }
    out
}

/// Text rendering of a Dijkstra table, one hub per line.
pub fn render_paths(network: &DeliveryNetwork, paths: &ShortestPaths) -> String {
    let mut out = format!("Shortest paths from {}\n", paths.source);
    for hub in network.labels() {
        let Some(entry) = paths.get(hub.as_str()) else {
            continue;
        };
        if entry.is_reachable() {
            let route: Vec<&str> = entry.path.iter().map(|h| h.as_str()).collect();
            out.push_str(&format!(
                "  {hub}: {} via {}\n",
                entry.distance,
                route.join(" -> ")
            ));
        } else {
            out.push_str(&format!("  {hub}: unreachable\n"));
        }
    }
    out
}
