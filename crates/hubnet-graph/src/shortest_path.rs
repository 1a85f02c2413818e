//! # Shortest Paths
//!
//! Single-source Dijkstra over the delivery network.
//!
//! The selection step scans every unsettled hub for the minimum tentative
//! distance, O(V²) overall. Ties go to the hub inserted first, so results
//! (including which of two equal-length paths is reported) are reproducible.
//! Relaxation uses a strict `<`: an equal-length alternative found later
//! never replaces the recorded predecessor.
//!
//! Route weights are positive and capped at
//! [`MAX_TRAVEL_TIME`](hubnet_core::MAX_TRAVEL_TIME) by construction, so
//! every reachable hub has a finite distance.

use std::collections::HashMap;

use hubnet_core::{GraphError, HubLabel};
use serde::Serialize;

use crate::network::DeliveryNetwork;

/// Shortest route from the source to one hub.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Target hub.
    pub hub: HubLabel,
    /// Total travel time; `f64::INFINITY` if unreachable.
    pub distance: f64,
    /// Hubs on the route, source first and target last. Empty if unreachable.
    pub path: Vec<HubLabel>,
}

impl ShortestPath {
    /// Whether a route from the source exists.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Result of [`DeliveryNetwork::dijkstra`]: one entry per hub, in hub
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    /// The hub distances are measured from.
    pub source: HubLabel,
    entries: Vec<ShortestPath>,
    #[serde(skip)]
    position: HashMap<HubLabel, usize>,
}

impl ShortestPaths {
    /// Entry for a hub, or `None` if the hub was not in the network.
    pub fn get(&self, hub: &str) -> Option<&ShortestPath> {
        self.position.get(hub).map(|&i| &self.entries[i])
    }

    /// Distance to a hub: `None` for unknown hubs, `f64::INFINITY` for
    /// unreachable ones.
    pub fn distance_to(&self, hub: &str) -> Option<f64> {
        self.get(hub).map(|entry| entry.distance)
    }

    /// Path to a hub; empty for unknown or unreachable hubs.
    pub fn path_to(&self, hub: &str) -> &[HubLabel] {
        self.get(hub)
            .map(|entry| entry.path.as_slice())
            .unwrap_or_default()
    }

    /// All entries in hub insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ShortestPath> {
        self.entries.iter()
    }

    /// Number of entries (equal to the network's hub count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DeliveryNetwork {
    /// Shortest travel time and route from `source` to every hub.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the source hub is missing.
    pub fn dijkstra(&self, source: &str) -> Result<ShortestPaths, GraphError> {
        let start = self.require(source)?;
        let count = self.vertex_count();
        let mut distance = vec![f64::INFINITY; count];
        let mut previous: Vec<Option<usize>> = vec![None; count];
        let mut settled = vec![false; count];
        distance[start] = 0.0;

        loop {
            let next = (0..count)
                .filter(|&v| !settled[v] && distance[v].is_finite())
                .min_by(|&a, &b| distance[a].total_cmp(&distance[b]));
            let Some(current) = next else {
                break;
            };
            settled[current] = true;
            for route in self.arcs(current) {
                if settled[route.to] {
                    continue;
                }
                let candidate = distance[current] + route.weight;
                if candidate < distance[route.to] {
                    distance[route.to] = candidate;
                    previous[route.to] = Some(current);
                }
            }
        }

        let mut entries = Vec::with_capacity(count);
        let mut position = HashMap::with_capacity(count);
        for target in 0..count {
            let hub = self.label_at(target).clone();
            let path = if distance[target].is_finite() {
                self.reconstruct(&previous, start, target)
            } else {
                Vec::new()
            };
            position.insert(hub.clone(), target);
            entries.push(ShortestPath {
                hub,
                distance: distance[target],
                path,
            });
        }

        tracing::debug!(
            source,
            reachable = entries.iter().filter(|e| e.is_reachable()).count(),
            "dijkstra complete"
        );
        Ok(ShortestPaths {
            source: self.label_at(start).clone(),
            entries,
            position,
        })
    }

    fn reconstruct(&self, previous: &[Option<usize>], start: usize, target: usize) -> Vec<HubLabel> {
        let mut path = vec![self.label_at(target).clone()];
        let mut hub = target;
        while hub != start {
            match previous[hub] {
                Some(p) => {
                    path.push(self.label_at(p).clone());
                    hub = p;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}
