//! # Scheduler Configuration
//!
//! Every field has a default, so a configuration file only needs to name
//! the values it changes.

use hubnet_core::{DeliveryStatus, HubLabel, ValidationError};
use serde::{Deserialize, Serialize};

use crate::priority::PriorityPolicy;

/// Default origin hub.
pub const DEFAULT_ORIGIN: &str = "A";

/// Default heap capacity.
pub const DEFAULT_CAPACITY: usize = 100;

/// Scheduler settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Hub that every travel time is measured from.
    pub origin: String,
    /// Maximum number of queued entries. Admission past this fails.
    pub capacity: usize,
    /// Priority formula constants.
    pub priority: PriorityPolicy,
    /// Statuses eligible for scheduling. Other customers are skipped.
    pub active_statuses: Vec<DeliveryStatus>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            capacity: DEFAULT_CAPACITY,
            priority: PriorityPolicy::default(),
            active_statuses: vec![DeliveryStatus::InTransit, DeliveryStatus::Delayed],
        }
    }
}

impl SchedulerConfig {
    /// Check the origin label, capacity and priority constants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        HubLabel::new(self.origin.as_str())?;
        if self.capacity == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        self.priority.validate()
    }

    /// Whether a status is eligible for scheduling.
    pub fn is_active(&self, status: &DeliveryStatus) -> bool {
        self.active_statuses.contains(status)
    }
}
