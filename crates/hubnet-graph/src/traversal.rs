//! # Traversals
//!
//! Breadth-first reachability and depth-first cycle detection.
//!
//! Both traversals allocate their visit state per call, indexed by hub
//! position. Nothing is stored on the hubs themselves, so repeated calls are
//! independent and a traversal never observes state left by an earlier one.
//!
//! Neighbours are visited in route insertion order and roots in hub insertion
//! order, which makes every result reproducible for a given network.

use std::collections::VecDeque;

use hubnet_core::{GraphError, HubLabel};
use serde::Serialize;

use crate::network::DeliveryNetwork;

// ---------------------------------------------------------------------------
// Breadth-first search
// ---------------------------------------------------------------------------

/// Hop distance of one reachable hub from the BFS source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubLevel {
    /// The reached hub.
    pub hub: HubLabel,
    /// Number of routes on the fewest-hop path from the source.
    pub level: usize,
}

/// Result of [`DeliveryNetwork::bfs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reachability {
    /// The hub the search started from.
    pub source: HubLabel,
    /// Levels of reachable hubs, in hub insertion order.
    pub levels: Vec<HubLevel>,
    /// Reachable hubs in the order the search dequeued them.
    pub discovery_order: Vec<HubLabel>,
    /// Hubs with no path from the source, in hub insertion order.
    pub unreachable: Vec<HubLabel>,
}

impl Reachability {
    /// Hop distance of a hub, or `None` if it is unreachable or unknown.
    pub fn level(&self, hub: &str) -> Option<usize> {
        self.levels
            .iter()
            .find(|entry| entry.hub == hub)
            .map(|entry| entry.level)
    }

    /// Whether a hub was reached.
    pub fn is_reachable(&self, hub: &str) -> bool {
        self.level(hub).is_some()
    }

    /// Largest level among reached hubs.
    pub fn depth(&self) -> usize {
        self.levels.iter().map(|entry| entry.level).max().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Cycle detection
// ---------------------------------------------------------------------------

/// Result of [`DeliveryNetwork::detect_cycle`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CycleReport {
    /// Whether any cycle exists.
    pub found: bool,
    /// The first cycle found. Starts and ends with the same hub; consecutive
    /// hubs are adjacent. Empty when `found` is false.
    pub cycle: Vec<HubLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

struct Frame {
    hub: usize,
    next: usize,
}

impl DeliveryNetwork {
    /// Hop distances from `source` to every reachable hub.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the source hub is missing.
    pub fn bfs(&self, source: &str) -> Result<Reachability, GraphError> {
        let start = self.require(source)?;
        let mut level: Vec<Option<usize>> = vec![None; self.vertex_count()];
        let mut queue = VecDeque::new();
        let mut discovery_order = Vec::new();

        level[start] = Some(0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            discovery_order.push(self.label_at(current).clone());
            let next_level = level[current].map_or(0, |l| l + 1);
            for route in self.arcs(current) {
                if level[route.to].is_none() {
                    level[route.to] = Some(next_level);
                    queue.push_back(route.to);
                }
            }
        }

        let mut levels = Vec::with_capacity(discovery_order.len());
        let mut unreachable = Vec::new();
        for (position, hub_level) in level.into_iter().enumerate() {
            let hub = self.label_at(position).clone();
            match hub_level {
                Some(level) => levels.push(HubLevel { hub, level }),
                None => unreachable.push(hub),
            }
        }

        tracing::debug!(
            source,
            reached = levels.len(),
            unreachable = unreachable.len(),
            "bfs complete"
        );
        Ok(Reachability {
            source: self.label_at(start).clone(),
            levels,
            discovery_order,
            unreachable,
        })
    }

    /// Find a cycle anywhere in the network.
    ///
    /// Every component is explored, roots taken in hub insertion order. The
    /// arc back to a hub's own DFS parent is not a cycle and is skipped.
    /// Reaching an in-progress hub closes a cycle, reported as the revisited
    /// hub, then the current hub and its DFS ancestors up to (not including)
    /// the revisited hub, then the revisited hub again. The search stops at
    /// the first cycle.
    pub fn detect_cycle(&self) -> CycleReport {
        let count = self.vertex_count();
        let mut state = vec![VisitState::Unvisited; count];
        let mut parent: Vec<Option<usize>> = vec![None; count];

        for root in 0..count {
            if state[root] != VisitState::Unvisited {
                continue;
            }
            state[root] = VisitState::InProgress;
            let mut stack = vec![Frame { hub: root, next: 0 }];

            while let Some(frame) = stack.last_mut() {
                let current = frame.hub;
                let Some(route) = self.arcs(current).get(frame.next) else {
                    state[current] = VisitState::Done;
                    stack.pop();
                    continue;
                };
                frame.next += 1;
                let neighbor = route.to;

                if parent[current] == Some(neighbor) {
                    continue;
                }
                match state[neighbor] {
                    VisitState::Unvisited => {
                        state[neighbor] = VisitState::InProgress;
                        parent[neighbor] = Some(current);
                        stack.push(Frame {
                            hub: neighbor,
                            next: 0,
                        });
                    }
                    VisitState::InProgress => {
                        let cycle = self.trace_cycle(&parent, current, neighbor);
                        tracing::debug!(length = cycle.len(), "cycle found");
                        return CycleReport { found: true, cycle };
                    }
                    VisitState::Done => {}
                }
            }
        }

        CycleReport::default()
    }

    fn trace_cycle(&self, parent: &[Option<usize>], current: usize, revisited: usize) -> Vec<HubLabel> {
        let mut cycle = vec![self.label_at(revisited).clone()];
        let mut hub = Some(current);
        while let Some(h) = hub {
            if h == revisited {
                break;
            }
            cycle.push(self.label_at(h).clone());
            hub = parent[h];
        }
        cycle.push(self.label_at(revisited).clone());
        cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(hubs: &[HubLabel]) -> Vec<&str> {
        hubs.iter().map(HubLabel::as_str).collect()
    }

    fn net(hubs: &[&'static str], routes: &[(&'static str, &'static str, f64)]) -> DeliveryNetwork {
        DeliveryNetwork::from_routes(hubs.iter().copied(), routes.iter().copied()).unwrap()
    }

    #[test]
    fn bfs_levels_from_source() {
        let n = net(
            &["A", "B", "C", "D", "E"],
            &[("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0), ("D", "E", 1.0), ("C", "D", 9.0)],
        );
        let r = n.bfs("A").unwrap();
        assert_eq!(r.level("A"), Some(0));
        assert_eq!(r.level("B"), Some(1));
        assert_eq!(r.level("C"), Some(1));
        assert_eq!(r.level("D"), Some(2));
        assert_eq!(r.level("E"), Some(3));
        assert_eq!(r.depth(), 3);
        assert_eq!(labels(&r.discovery_order), vec!["A", "B", "C", "D", "E"]);
        assert!(r.unreachable.is_empty());
    }

    #[test]
    fn bfs_omits_unreachable_hubs() {
        let n = net(&["A", "B", "X", "Y"], &[("A", "B", 2.0), ("X", "Y", 2.0)]);
        let r = n.bfs("A").unwrap();
        assert_eq!(r.levels.len(), 2);
        assert!(!r.is_reachable("X"));
        assert_eq!(labels(&r.unreachable), vec!["X", "Y"]);
    }

    #[test]
    fn bfs_unknown_source() {
        let n = net(&["A"], &[]);
        assert_eq!(n.bfs("Q"), Err(GraphError::VertexNotFound("Q".into())));
    }

    #[test]
    fn bfs_is_repeatable() {
        let n = net(&["A", "B", "C"], &[("A", "B", 1.0), ("B", "C", 1.0)]);
        assert_eq!(n.bfs("B").unwrap(), n.bfs("B").unwrap());
        assert_eq!(n.bfs("A").unwrap().level("C"), Some(2));
    }

    #[test]
    fn acyclic_network_has_no_cycle() {
        let n = net(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("B", "D", 1.0)],
        );
        let report = n.detect_cycle();
        assert!(!report.found);
        assert!(report.cycle.is_empty());
    }

    #[test]
    fn single_route_is_not_a_cycle() {
        let n = net(&["A", "B"], &[("A", "B", 1.0)]);
        assert!(!n.detect_cycle().found);
    }

    #[test]
    fn triangle_cycle_is_reported() {
        let n = net(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)],
        );
        let report = n.detect_cycle();
        assert!(report.found);
        assert_eq!(labels(&report.cycle), vec!["A", "C", "B", "A"]);
    }

    #[test]
    fn cycle_in_second_component_is_found() {
        let n = net(
            &["A", "B", "P", "Q", "R", "S"],
            &[
                ("A", "B", 1.0),
                ("P", "Q", 1.0),
                ("Q", "R", 1.0),
                ("R", "S", 1.0),
                ("S", "P", 1.0),
            ],
        );
        let report = n.detect_cycle();
        assert!(report.found);
        assert_eq!(labels(&report.cycle), vec!["P", "S", "R", "Q", "P"]);
        for pair in report.cycle.windows(2) {
            assert!(n.is_adjacent(pair[0].as_str(), pair[1].as_str()));
        }
    }

    #[test]
    fn cycle_detection_is_repeatable() {
        let n = net(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("D", "B", 1.0)],
        );
        let first = n.detect_cycle();
        assert_eq!(first, n.detect_cycle());
        assert_eq!(labels(&first.cycle), vec!["B", "D", "C", "B"]);
    }

    #[test]
    fn empty_network_has_no_cycle() {
        assert_eq!(DeliveryNetwork::new().detect_cycle(), CycleReport::default());
    }
}
