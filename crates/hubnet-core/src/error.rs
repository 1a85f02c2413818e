//! # Error Hierarchy
//!
//! Structured error types for hubnet, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every failure is scoped to one operation: a rejected mutation leaves the
//! graph untouched, a rejected admission leaves already-queued entries
//! untouched. Nothing here is retried internally; the caller decides.
//!
//! Two outcomes are not errors and have no variant here:
//! skipping a customer whose delivery is inactive, and draining an empty
//! scheduler.

use thiserror::Error;

use crate::identity::CustomerId;

/// Largest accepted route travel time. Path sums over any realistic number
/// of hops stay finite, so a connected hub always has a finite distance.
pub const MAX_TRAVEL_TIME: f64 = 1.0e12;

/// Top-level error type for hubnet.
#[derive(Error, Debug)]
pub enum HubnetError {
    /// Graph structure or traversal precondition violation.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// A delivery request could not be admitted to the scheduler.
    #[error("admission error: {0}")]
    Admission(#[from] AdmissionError),

    /// Customer directory failure.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Domain primitive or configuration validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by the graph engine.
///
/// Structural variants reject a mutation with no partial state change.
/// `VertexNotFound` is also the precondition failure for traversals whose
/// source hub is absent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A hub with this label already exists.
    #[error("hub \"{0}\" already exists")]
    DuplicateVertex(String),

    /// No hub with this label exists.
    #[error("hub \"{0}\" not found")]
    VertexNotFound(String),

    /// An edge from a hub to itself was requested.
    #[error("cannot connect hub \"{0}\" to itself")]
    SelfLoop(String),

    /// The two hubs are already adjacent.
    #[error("route {from} -- {to} already exists")]
    EdgeExists {
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
    },

    /// The two hubs are not adjacent.
    #[error("route {from} -- {to} does not exist")]
    EdgeNotFound {
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
    },

    /// Edge weight is not in `(0, MAX_TRAVEL_TIME]`; NaN is rejected too.
    #[error(
        "route {from} -- {to} has invalid travel time {weight} (must be positive and at most {})",
        MAX_TRAVEL_TIME
    )]
    InvalidWeight {
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
        /// The rejected weight.
        weight: f64,
    },
}

/// Errors that reject a single delivery request at admission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdmissionError {
    /// The customer is not in the directory.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// No route exists from the origin hub to the destination, or the
    /// destination is not a hub of the network.
    #[error("no route to hub \"{0}\"")]
    UnreachableDestination(String),

    /// The shortest route has zero travel time (destination is the origin).
    #[error("travel time to hub \"{0}\" is zero")]
    ZeroTravelTime(String),

    /// The dispatch heap is at capacity.
    #[error("scheduler is full (capacity {capacity})")]
    SchedulerFull {
        /// The configured capacity.
        capacity: usize,
    },

    /// The configured origin hub is unusable for shortest-path computation.
    #[error("origin hub unavailable: {0}")]
    Origin(#[from] GraphError),
}

/// Errors raised by a customer directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No customer with this id is registered.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),
}

/// Validation errors for domain primitives and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Hub labels must contain at least one non-whitespace character.
    #[error("invalid hub label: must be non-empty")]
    EmptyHubLabel,

    /// Priority tiers run from 1 (most urgent) to 5.
    #[error("invalid priority tier {0} (expected 1-5)")]
    InvalidPriorityTier(i64),

    /// The scheduler needs room for at least one entry.
    #[error("scheduler capacity must be at least 1")]
    ZeroCapacity,

    /// The travel-time scale of the priority formula must be positive and finite.
    #[error("invalid travel-time scale {0} (must be positive and finite)")]
    InvalidTravelTimeScale(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn graph_error_duplicate_vertex_display() {
        let err = GraphError::DuplicateVertex(hub("A"));
        assert_eq!(format!("{err}"), "hub \"A\" already exists");
    }

    #[test]
    fn graph_error_invalid_weight_display() {
        let err = GraphError::InvalidWeight {
            from: hub("A"),
            to: hub("B"),
            weight: -2.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("A -- B"));
        assert!(msg.contains("-2"));
        assert!(msg.contains("at most 1000000000000"));
    }

    #[test]
    fn admission_error_wraps_graph_error() {
        let err: AdmissionError = GraphError::VertexNotFound(hub("Z")).into();
        assert!(format!("{err}").contains("origin hub unavailable"));
        assert!(format!("{err}").contains("\"Z\""));
    }

    #[test]
    fn admission_error_scheduler_full_display() {
        let err = AdmissionError::SchedulerFull { capacity: 3 };
        assert!(format!("{err}").contains("capacity 3"));
    }

    #[test]
    fn hubnet_error_from_each_subsystem() {
        let e1: HubnetError = GraphError::SelfLoop(hub("A")).into();
        let e2: HubnetError = AdmissionError::ZeroTravelTime(hub("A")).into();
        let e3: HubnetError = DirectoryError::CustomerNotFound(CustomerId::new(7)).into();
        let e4: HubnetError = ValidationError::ZeroCapacity.into();
        assert!(format!("{e1}").starts_with("graph error"));
        assert!(format!("{e2}").starts_with("admission error"));
        assert!(format!("{e3}").contains("customer 7"));
        assert!(format!("{e4}").starts_with("validation error"));
    }

    #[test]
    fn validation_error_invalid_tier_display() {
        let err = ValidationError::InvalidPriorityTier(9);
        assert!(format!("{err}").contains("9"));
        assert!(format!("{err}").contains("1-5"));
    }
}
