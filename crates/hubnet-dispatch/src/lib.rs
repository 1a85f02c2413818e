#![deny(missing_docs)]

//! # hubnet-dispatch: Priority Dispatch Scheduler
//!
//! Delivery requests are admitted against two collaborators: the
//! [`CustomerDirectory`](hubnet_core::CustomerDirectory), for the customer's
//! tier and whether their delivery is still active, and the
//! [`DeliveryNetwork`](hubnet_graph::DeliveryNetwork), for the shortest
//! travel time from the origin hub. Admitted requests are scored by
//! [`PriorityPolicy`] and held in a bounded [`DispatchHeap`] until released
//! by [`DeliveryScheduler::process_next_delivery`].
//!
//! [`DeliveryScheduler`] is single-threaded. [`SharedScheduler`] wraps one
//! behind a mutex for callers that admit or release from several threads.

pub mod config;
pub mod entry;
pub mod heap;
pub mod priority;
pub mod scheduler;
pub mod shared;

pub use config::SchedulerConfig;
pub use entry::{DeliveryResult, DispatchEntry};
pub use heap::DispatchHeap;
pub use priority::PriorityPolicy;
pub use scheduler::{Admission, DeliveryScheduler, SchedulerStats};
pub use shared::SharedScheduler;
