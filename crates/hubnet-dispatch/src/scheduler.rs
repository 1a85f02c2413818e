//! # Delivery Scheduler
//!
//! Admits delivery requests into the [`DispatchHeap`] and releases them in
//! priority order.
//!
//! ## Request lifecycle
//!
//! ```text
//! Submitted ──▶ Skipped                    (inactive status, not an error)
//!     │
//!     ├──────▶ Rejected                    (AdmissionError)
//!     │
//!     └──────▶ Queued ──▶ Extracted
//! ```
//!
//! Admission checks run in a fixed order: the customer must exist, its
//! status must be active, the destination must be reachable from the origin
//! with a non-zero travel time, and the heap must have room. A rejection
//! leaves every already-queued entry untouched.
//!
//! The scheduler borrows the network and the directory for the length of a
//! single call and keeps no references to either.

use hubnet_core::{AdmissionError, CustomerDirectory, CustomerId, DeliveryStatus, ValidationError};
use hubnet_graph::DeliveryNetwork;
use serde::Serialize;

use crate::config::SchedulerConfig;
use crate::entry::{DeliveryResult, DispatchEntry};
use crate::heap::DispatchHeap;

/// Successful outcome of [`DeliveryScheduler::insert_delivery_request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// The request was queued with this score.
    Queued {
        /// Priority score.
        priority: f64,
        /// Shortest travel time from the origin.
        travel_time: f64,
    },
    /// The customer's status is not active; nothing was queued.
    Skipped {
        /// The inactive status.
        status: DeliveryStatus,
    },
}

impl Admission {
    /// Whether the request entered the heap.
    pub fn is_queued(&self) -> bool {
        matches!(self, Self::Queued { .. })
    }
}

/// Request counters, one per lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchedulerStats {
    /// Calls to `insert_delivery_request`.
    pub submitted: usize,
    /// Requests that entered the heap.
    pub queued: usize,
    /// Requests skipped for an inactive status.
    pub skipped: usize,
    /// Requests rejected with an error.
    pub rejected: usize,
    /// Entries released by `process_next_delivery`.
    pub extracted: usize,
}

impl std::fmt::Display for SchedulerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "submitted={} queued={} skipped={} rejected={} extracted={}",
            self.submitted, self.queued, self.skipped, self.rejected, self.extracted
        )
    }
}

/// Priority dispatch scheduler.
#[derive(Debug, Clone)]
pub struct DeliveryScheduler {
    config: SchedulerConfig,
    heap: DispatchHeap,
    stats: SchedulerStats,
}

impl Default for DeliveryScheduler {
    fn default() -> Self {
        let config = SchedulerConfig::default();
        Self {
            heap: DispatchHeap::new(config.capacity),
            config,
            stats: SchedulerStats::default(),
        }
    }
}

impl DeliveryScheduler {
    /// Create a scheduler from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] reported by [`SchedulerConfig::validate`].
    pub fn new(config: SchedulerConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            heap: DispatchHeap::new(config.capacity),
            config,
            stats: SchedulerStats::default(),
        })
    }

    /// Validate and queue a delivery of `customer`'s parcel to `destination`.
    ///
    /// Returns [`Admission::Skipped`] when the customer's status is not
    /// active; that is a policy outcome, not a failure.
    ///
    /// # Errors
    ///
    /// - [`AdmissionError::CustomerNotFound`] if the directory has no such customer.
    /// - [`AdmissionError::Origin`] if the origin hub is not in the network.
    /// - [`AdmissionError::UnreachableDestination`] if no route leads to the
    ///   destination, or the destination is not a hub.
    /// - [`AdmissionError::ZeroTravelTime`] if the destination is the origin.
    /// - [`AdmissionError::SchedulerFull`] if the heap is at capacity.
    pub fn insert_delivery_request<D>(
        &mut self,
        network: &DeliveryNetwork,
        directory: &D,
        customer: CustomerId,
        destination: &str,
    ) -> Result<Admission, AdmissionError>
    where
        D: CustomerDirectory + ?Sized,
    {
        self.stats.submitted += 1;
        let outcome = self.admit(network, directory, customer, destination);
        match &outcome {
            Ok(Admission::Queued { priority, travel_time }) => {
                self.stats.queued += 1;
                tracing::debug!(%customer, destination, priority, travel_time, "delivery queued");
            }
            Ok(Admission::Skipped { status }) => {
                self.stats.skipped += 1;
                tracing::info!(%customer, %status, "inactive delivery skipped");
            }
            Err(err) => {
                self.stats.rejected += 1;
                tracing::debug!(%customer, destination, error = %err, "delivery rejected");
            }
        }
        outcome
    }

    fn admit<D>(
        &mut self,
        network: &DeliveryNetwork,
        directory: &D,
        customer: CustomerId,
        destination: &str,
    ) -> Result<Admission, AdmissionError>
    where
        D: CustomerDirectory + ?Sized,
    {
        let record = directory
            .lookup(customer)
            .map_err(|_| AdmissionError::CustomerNotFound(customer))?;
        if !self.config.is_active(&record.status) {
            return Ok(Admission::Skipped {
                status: record.status.clone(),
            });
        }

        let paths = network.dijkstra(&self.config.origin)?;
        let target = paths
            .get(destination)
            .filter(|path| path.is_reachable())
            .ok_or_else(|| AdmissionError::UnreachableDestination(destination.to_string()))?;
        if target.distance == 0.0 {
            return Err(AdmissionError::ZeroTravelTime(destination.to_string()));
        }

        let travel_time = target.distance;
        let priority = self.config.priority.score(record.tier, travel_time);
        self.heap.insert(DispatchEntry {
            customer,
            destination: target.hub.clone(),
            travel_time,
            priority,
        })?;
        Ok(Admission::Queued {
            priority,
            travel_time,
        })
    }

    /// Release the highest-priority delivery, or `None` if nothing is queued.
    pub fn process_next_delivery(&mut self) -> Option<DeliveryResult> {
        let entry = self.heap.extract_max()?;
        self.stats.extracted += 1;
        tracing::debug!(
            customer = %entry.customer,
            destination = %entry.destination,
            priority = entry.priority,
            remaining = self.heap.len(),
            "delivery released"
        );
        Some(entry.into())
    }

    /// Release every queued delivery in priority order.
    pub fn drain(&mut self) -> impl Iterator<Item = DeliveryResult> + '_ {
        std::iter::from_fn(move || self.process_next_delivery())
    }

    /// The next delivery to be released, without removing it.
    pub fn peek(&self) -> Option<&DispatchEntry> {
        self.heap.peek()
    }

    /// Number of queued deliveries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Maximum number of queued deliveries.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Request counters since construction.
    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}
