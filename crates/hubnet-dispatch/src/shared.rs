//! Thread-safe handle to a single [`DeliveryScheduler`].
//!
//! Every operation takes one `parking_lot::Mutex` for its full duration, so
//! admissions and extractions from different threads are serialized and the
//! heap is never observed mid-update. `parking_lot` mutexes do not poison.

use std::sync::Arc;

use hubnet_core::{AdmissionError, CustomerDirectory, CustomerId};
use hubnet_graph::DeliveryNetwork;
use parking_lot::Mutex;

use crate::entry::DeliveryResult;
use crate::scheduler::{Admission, DeliveryScheduler, SchedulerStats};

/// Cloneable, lock-guarded scheduler handle. Clones share one scheduler.
#[derive(Debug, Clone, Default)]
pub struct SharedScheduler {
    inner: Arc<Mutex<DeliveryScheduler>>,
}

impl SharedScheduler {
    /// Wrap a scheduler.
    pub fn new(scheduler: DeliveryScheduler) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// See [`DeliveryScheduler::insert_delivery_request`].
    ///
    /// # Errors
    ///
    /// Returns the scheduler's [`AdmissionError`].
    pub fn insert_delivery_request<D>(
        &self,
        network: &DeliveryNetwork,
        directory: &D,
        customer: CustomerId,
        destination: &str,
    ) -> Result<Admission, AdmissionError>
    where
        D: CustomerDirectory + ?Sized,
    {
        self.inner
            .lock()
            .insert_delivery_request(network, directory, customer, destination)
    }

    /// See [`DeliveryScheduler::process_next_delivery`].
    pub fn process_next_delivery(&self) -> Option<DeliveryResult> {
        self.inner.lock().process_next_delivery()
    }

    /// Release every queued delivery in priority order under one lock.
    pub fn drain(&self) -> Vec<DeliveryResult> {
        self.inner.lock().drain().collect()
    }

    /// Number of queued deliveries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Request counters.
    pub fn stats(&self) -> SchedulerStats {
        self.inner.lock().stats()
    }

    /// Run `f` with exclusive access to the scheduler.
    pub fn with<R>(&self, f: impl FnOnce(&mut DeliveryScheduler) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
