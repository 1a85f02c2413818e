//! # Delivery Network
//!
//! Undirected weighted graph over hubs, stored as adjacency lists.
//!
//! ## Representation
//!
//! Hubs live in a dense `Vec` in insertion order; a `HashMap` maps each
//! label to its position. Hubs are never removed, so positions are stable
//! and every traversal can address per-call state by position instead of
//! re-scanning labels.
//!
//! Each undirected route is stored as two directed arcs, one in each
//! endpoint's adjacency list, appended in insertion order. Both arcs are
//! written together by [`DeliveryNetwork::add_edge`] and removed together by
//! [`DeliveryNetwork::remove_edge`], so they always carry the same weight.
//!
//! ## Invariants
//!
//! - Labels are unique.
//! - No self-loops.
//! - At most one route between any pair of hubs.
//! - Every weight is positive and at most [`MAX_TRAVEL_TIME`], so path
//!   sums never overflow to infinity.

use std::collections::HashMap;

use hubnet_core::{GraphError, HubLabel, HubnetError, MAX_TRAVEL_TIME};

/// A directed arc in a hub's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Route {
    /// Position of the neighbouring hub.
    pub(crate) to: usize,
    /// Travel time along the route.
    pub(crate) weight: f64,
}

#[derive(Debug, Clone)]
struct Hub {
    label: HubLabel,
    arcs: Vec<Route>,
}

/// The delivery network graph.
#[derive(Debug, Clone, Default)]
pub struct DeliveryNetwork {
    hubs: Vec<Hub>,
    index: HashMap<HubLabel, usize>,
    route_count: usize,
}

impl DeliveryNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from hub labels followed by `(from, to, travel_time)` routes.
    ///
    /// Hubs and routes are added in the order given, so adjacency order
    /// (and therefore traversal order) follows the input.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty label, or the first structural
    /// [`GraphError`] raised while adding hubs and routes.
    pub fn from_routes<'a>(
        hubs: impl IntoIterator<Item = &'a str>,
        routes: impl IntoIterator<Item = (&'a str, &'a str, f64)>,
    ) -> Result<Self, HubnetError> {
        let mut network = Self::new();
        for label in hubs {
            network.add_vertex(HubLabel::new(label)?)?;
        }
        for (from, to, weight) in routes {
            network.add_edge(from, to, weight)?;
        }
        Ok(network)
    }

    /// Add an isolated hub.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the label is already present.
    pub fn add_vertex(&mut self, label: HubLabel) -> Result<(), GraphError> {
        if self.index.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label.into()));
        }
        let position = self.hubs.len();
        self.index.insert(label.clone(), position);
        tracing::debug!(hub = %label, "hub added");
        self.hubs.push(Hub {
            label,
            arcs: Vec::new(),
        });
        Ok(())
    }

    /// Connect two hubs with an undirected route of the given travel time.
    ///
    /// Validation runs before any mutation: either both arcs are inserted or
    /// the network is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`] if either endpoint is missing.
    /// - [`GraphError::SelfLoop`] if both endpoints are the same hub.
    /// - [`GraphError::EdgeExists`] if the hubs are already adjacent.
    /// - [`GraphError::InvalidWeight`] if the weight is not in
    ///   `(0, MAX_TRAVEL_TIME]` (NaN included).
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), GraphError> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        if a == b {
            return Err(GraphError::SelfLoop(from.to_string()));
        }
        if self.arc_position(a, b).is_some() {
            return Err(GraphError::EdgeExists {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if !(weight > 0.0 && weight <= MAX_TRAVEL_TIME) {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        self.hubs[a].arcs.push(Route { to: b, weight });
        self.hubs[b].arcs.push(Route { to: a, weight });
        self.route_count += 1;
        tracing::debug!(from, to, weight, "route added");
        Ok(())
    }

    /// Remove the route between two hubs, returning its travel time.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is missing,
    /// or [`GraphError::EdgeNotFound`] if they are not adjacent.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<f64, GraphError> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        let (Some(ab), Some(ba)) = (self.arc_position(a, b), self.arc_position(b, a)) else {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        let removed = self.hubs[a].arcs.remove(ab);
        self.hubs[b].arcs.remove(ba);
        self.route_count -= 1;
        tracing::debug!(from, to, "route removed");
        Ok(removed.weight)
    }

    /// Whether a hub with this label exists.
    pub fn has_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Whether an arc `from -> to` exists. Unknown hubs are simply not adjacent.
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.arc_position(a, b).is_some(),
            _ => false,
        }
    }

    /// Travel time of the route between two hubs, if they are adjacent.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let a = *self.index.get(from)?;
        let b = *self.index.get(to)?;
        self.arc_position(a, b).map(|p| self.hubs[a].arcs[p].weight)
    }

    /// Neighbours of a hub with their travel times, in route insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the hub is missing.
    pub fn neighbors(&self, label: &str) -> Result<Vec<(&HubLabel, f64)>, GraphError> {
        let position = self.require(label)?;
        Ok(self.hubs[position]
            .arcs
            .iter()
            .map(|arc| (&self.hubs[arc.to].label, arc.weight))
            .collect())
    }

    /// Hub labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &HubLabel> {
        self.hubs.iter().map(|hub| &hub.label)
    }

    /// Number of hubs.
    pub fn vertex_count(&self) -> usize {
        self.hubs.len()
    }

    /// Number of undirected routes.
    pub fn edge_count(&self) -> usize {
        self.route_count
    }

    /// Whether the network has no hubs.
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    /// Render the adjacency list, one hub per line: `A: B(5) C(3)`.
    pub fn adjacency_list(&self) -> String {
        self.to_string()
    }

    // ── Crate-internal accessors for the traversal algorithms ───────

    pub(crate) fn position(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub(crate) fn require(&self, label: &str) -> Result<usize, GraphError> {
        self.position(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    pub(crate) fn label_at(&self, position: usize) -> &HubLabel {
        &self.hubs[position].label
    }

    pub(crate) fn arcs(&self, position: usize) -> &[Route] {
        &self.hubs[position].arcs
    }

    fn arc_position(&self, from: usize, to: usize) -> Option<usize> {
        self.hubs[from].arcs.iter().position(|arc| arc.to == to)
    }
}

impl std::fmt::Display for DeliveryNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hubs.is_empty() {
            return f.write_str("graph is empty");
        }
        for (i, hub) in self.hubs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", hub.label)?;
            for arc in &hub.arcs {
                write!(f, " {}({})", self.hubs[arc.to].label, arc.weight)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub(s: &str) -> HubLabel {
        HubLabel::new(s).unwrap()
    }

    fn triangle() -> DeliveryNetwork {
        DeliveryNetwork::from_routes(
            ["A", "B", "C"],
            [("A", "B", 5.0), ("A", "C", 3.0), ("B", "C", 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn add_vertex_rejects_duplicate() {
        let mut net = DeliveryNetwork::new();
        net.add_vertex(hub("A")).unwrap();
        assert_eq!(
            net.add_vertex(hub("A")),
            Err(GraphError::DuplicateVertex("A".into()))
        );
        assert_eq!(net.vertex_count(), 1);
    }

    #[test]
    fn add_edge_is_symmetric() {
        let net = triangle();
        assert!(net.is_adjacent("A", "B"));
        assert!(net.is_adjacent("B", "A"));
        assert_eq!(net.weight("A", "B"), Some(5.0));
        assert_eq!(net.weight("B", "A"), Some(5.0));
        assert_eq!(net.edge_count(), 3);
    }

    #[test]
    fn add_edge_missing_endpoint() {
        let mut net = triangle();
        assert_eq!(
            net.add_edge("A", "Z", 1.0),
            Err(GraphError::VertexNotFound("Z".into()))
        );
        assert_eq!(
            net.add_edge("Y", "A", 1.0),
            Err(GraphError::VertexNotFound("Y".into()))
        );
    }

    #[test]
    fn add_edge_rejects_self_loop() {
        let mut net = triangle();
        assert_eq!(
            net.add_edge("B", "B", 2.0),
            Err(GraphError::SelfLoop("B".into()))
        );
    }

    #[test]
    fn add_edge_rejects_duplicate_in_either_direction() {
        let mut net = triangle();
        assert!(matches!(
            net.add_edge("A", "B", 9.0),
            Err(GraphError::EdgeExists { .. })
        ));
        assert!(matches!(
            net.add_edge("B", "A", 9.0),
            Err(GraphError::EdgeExists { .. })
        ));
        assert_eq!(net.weight("A", "B"), Some(5.0));
    }

    #[test]
    fn add_edge_rejects_non_positive_and_non_finite_weights() {
        let mut net = DeliveryNetwork::from_routes(["A", "B"], []).unwrap();
        for w in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX] {
            assert!(matches!(
                net.add_edge("A", "B", w),
                Err(GraphError::InvalidWeight { .. })
            ));
        }
        assert_eq!(net.edge_count(), 0);
        assert!(!net.is_adjacent("A", "B"));
        assert!(!net.is_adjacent("B", "A"));
    }

    #[test]
    fn add_edge_weight_ceiling_is_inclusive() {
        let mut net = DeliveryNetwork::from_routes(["A", "B", "C"], []).unwrap();
        net.add_edge("A", "B", MAX_TRAVEL_TIME).unwrap();
        assert!(matches!(
            net.add_edge("B", "C", MAX_TRAVEL_TIME * 2.0),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn is_adjacent_unknown_hubs_is_false() {
        let net = triangle();
        assert!(!net.is_adjacent("A", "Q"));
        assert!(!net.is_adjacent("Q", "A"));
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let net = triangle();
        let a: Vec<_> = net
            .neighbors("A")
            .unwrap()
            .into_iter()
            .map(|(l, w)| (l.as_str(), w))
            .collect();
        assert_eq!(a, vec![("B", 5.0), ("C", 3.0)]);
        assert!(net.neighbors("Q").is_err());
    }

    #[test]
    fn remove_edge_removes_both_arcs() {
        let mut net = triangle();
        assert_eq!(net.remove_edge("C", "A"), Ok(3.0));
        assert!(!net.is_adjacent("A", "C"));
        assert!(!net.is_adjacent("C", "A"));
        assert_eq!(net.edge_count(), 2);
        assert!(matches!(
            net.remove_edge("A", "C"),
            Err(GraphError::EdgeNotFound { .. })
        ));
        net.add_edge("A", "C", 4.0).unwrap();
        assert_eq!(net.weight("C", "A"), Some(4.0));
    }

    #[test]
    fn labels_in_insertion_order() {
        let net = DeliveryNetwork::from_routes(["D", "B", "C"], []).unwrap();
        let labels: Vec<_> = net.labels().map(HubLabel::as_str).collect();
        assert_eq!(labels, vec!["D", "B", "C"]);
    }

    #[test]
    fn from_routes_rejects_empty_label() {
        assert!(matches!(
            DeliveryNetwork::from_routes([""], []),
            Err(HubnetError::Validation(_))
        ));
    }

    #[test]
    fn adjacency_list_rendering() {
        let net = triangle();
        assert_eq!(net.adjacency_list(), "A: B(5) C(3)\nB: A(5) C(1)\nC: A(3) B(1)");
        assert_eq!(DeliveryNetwork::new().to_string(), "graph is empty");
    }

    #[test]
    fn fractional_weights_render_exactly() {
        let net = DeliveryNetwork::from_routes(["A", "B"], [("A", "B", 2.5)]).unwrap();
        assert_eq!(net.adjacency_list(), "A: B(2.5)\nB: A(2.5)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn ring(n: usize) -> DeliveryNetwork {
        let mut net = DeliveryNetwork::new();
        for i in 0..n {
            net.add_vertex(HubLabel::new(format!("R{i}")).unwrap()).unwrap();
        }
        net
    }

    proptest! {
        /// Adding then removing a route restores adjacency in both directions.
        #[test]
        fn add_remove_is_symmetric(n in 2usize..10, a in 0usize..10, b in 0usize..10, w in 0.1f64..500.0) {
            let (a, b) = (format!("R{}", a % n), format!("R{}", b % n));
            prop_assume!(a != b);
            let mut net = ring(n);
            net.add_edge(&a, &b, w).unwrap();
            prop_assert!(net.is_adjacent(&a, &b) && net.is_adjacent(&b, &a));
            prop_assert_eq!(net.weight(&b, &a), Some(w));
            prop_assert_eq!(net.remove_edge(&b, &a), Ok(w));
            prop_assert!(!net.is_adjacent(&a, &b) && !net.is_adjacent(&b, &a));
            prop_assert_eq!(net.edge_count(), 0);
        }
    }
}
