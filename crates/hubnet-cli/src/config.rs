//! # Network Configuration
//!
//! A network file lists hubs, then routes, then optionally scheduler
//! settings:
//!
//! ```yaml
//! hubs: [A, B, C]
//! routes:
//!   - { from: A, to: B, travel_time: 5 }
//!   - { from: A, to: C, travel_time: 3 }
//! scheduler:
//!   origin: A
//!   capacity: 100
//! ```
//!
//! Building the network replays hubs and routes through the graph's own
//! mutators, so a file can never describe a network the API would reject.

use std::path::Path;

use anyhow::{Context, Result};
use hubnet_core::HubnetError;
use hubnet_dispatch::SchedulerConfig;
use hubnet_graph::DeliveryNetwork;
use serde::{Deserialize, Serialize};

/// One undirected route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Travel time; must be positive.
    pub travel_time: f64,
}

/// Parsed network file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Hub labels, in insertion order.
    pub hubs: Vec<String>,
    /// Routes, in insertion order.
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
    /// Scheduler settings; defaults apply when omitted.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl NetworkConfig {
    /// Read and parse a YAML network file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read network file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to parse network file: {}", path.display()))
    }

    /// Parse YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build the graph: every hub first, then every route.
    pub fn build_network(&self) -> Result<DeliveryNetwork, HubnetError> {
        DeliveryNetwork::from_routes(
            self.hubs.iter().map(String::as_str),
            self.routes
                .iter()
                .map(|r| (r.from.as_str(), r.to.as_str(), r.travel_time)),
        )
    }
}
