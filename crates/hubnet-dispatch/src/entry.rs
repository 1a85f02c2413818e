//! Heap entries and delivery results.

use hubnet_core::{CustomerId, HubLabel};
use serde::{Deserialize, Serialize};

/// A queued delivery request. Immutable while resident in the heap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchEntry {
    /// Customer the parcel belongs to.
    pub customer: CustomerId,
    /// Destination hub.
    pub destination: HubLabel,
    /// Shortest travel time from the origin hub, computed at admission.
    pub travel_time: f64,
    /// Priority score, computed at admission. Higher is dispatched first.
    pub priority: f64,
}

/// The outcome of one extraction from the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryResult {
    /// Customer the parcel belongs to.
    pub customer: CustomerId,
    /// Destination hub.
    pub destination: HubLabel,
    /// Shortest travel time from the origin hub.
    pub travel_time: f64,
}

impl From<DispatchEntry> for DeliveryResult {
    fn from(entry: DispatchEntry) -> Self {
        Self {
            customer: entry.customer,
            destination: entry.destination,
            travel_time: entry.travel_time,
        }
    }
}
