#![deny(missing_docs)]

//! # hubnet-core: Foundational Types for hubnet
//!
//! Every other crate in the workspace depends on `hubnet-core`; it depends
//! on nothing internal. External dependencies are limited to `serde` and
//! `thiserror`.
//!
//! ## Contents
//!
//! - [`HubLabel`] and [`CustomerId`]: validated identifier newtypes. No bare
//!   strings for hub names.
//! - [`Customer`], [`PriorityTier`], [`DeliveryStatus`]: the customer record
//!   as the scheduler sees it, with status spelling normalized on entry.
//! - [`CustomerDirectory`]: the lookup/update seam the scheduler consumes,
//!   and [`InMemoryDirectory`] implementing it.
//! - [`HubnetError`] and its per-subsystem enums.

pub mod customer;
pub mod directory;
pub mod error;
pub mod identity;

// Re-export primary types at crate root for ergonomic imports.
pub use customer::{Customer, DeliveryStatus, PriorityTier};
pub use directory::{CustomerDirectory, InMemoryDirectory};
pub use error::{
    AdmissionError, DirectoryError, GraphError, HubnetError, ValidationError, MAX_TRAVEL_TIME,
};
pub use identity::{CustomerId, HubLabel};
