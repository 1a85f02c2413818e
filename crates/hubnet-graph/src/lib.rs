#![deny(missing_docs)]

//! # hubnet-graph: The Delivery Network Graph Engine
//!
//! An undirected, positively weighted graph over hubs, plus the three
//! algorithms the dispatcher and operators rely on:
//!
//! - [`DeliveryNetwork::bfs`]: hop distances from a source hub.
//! - [`DeliveryNetwork::detect_cycle`]: the first cycle found by a
//!   whole-graph depth-first search.
//! - [`DeliveryNetwork::dijkstra`]: shortest travel time and route from a
//!   source hub to every hub.
//!
//! Structural rules (unique labels, no self-loops, no parallel routes,
//! positive finite weights) are enforced on every mutation, and a rejected
//! mutation leaves the network unchanged.
//!
//! The network is a plain value: traversals take `&self` and keep their
//! working state local to the call, so any number of readers may share a
//! network without locking.

pub mod network;
pub mod shortest_path;
pub mod traversal;

pub use network::DeliveryNetwork;
pub use shortest_path::{ShortestPath, ShortestPaths};
pub use traversal::{CycleReport, HubLevel, Reachability};
