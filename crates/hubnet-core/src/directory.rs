//! # Customer Directory
//!
//! The scheduler consults a directory for a customer's tier and delivery
//! status, and callers write the post-delivery status back through it. The
//! [`CustomerDirectory`] trait is that seam; [`InMemoryDirectory`] is the
//! in-process implementation used by the CLI and tests.
//!
//! Implementations own their records. Callers borrow them for the duration
//! of one call and never keep references across calls.

use std::collections::HashMap;

use crate::customer::{Customer, DeliveryStatus};
use crate::error::DirectoryError;
use crate::identity::CustomerId;

/// Lookup and status update by customer id.
pub trait CustomerDirectory {
    /// Find a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::CustomerNotFound`] if the id is unknown.
    fn lookup(&self, id: CustomerId) -> Result<&Customer, DirectoryError>;

    /// Replace the delivery status of a customer.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::CustomerNotFound`] if the id is unknown.
    fn update_status(&mut self, id: CustomerId, status: DeliveryStatus)
        -> Result<(), DirectoryError>;
}

/// `HashMap`-backed customer directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    customers: HashMap<CustomerId, Customer>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a customer, returning the record it replaced.
    pub fn insert(&mut self, customer: Customer) -> Option<Customer> {
        self.customers.insert(customer.id, customer)
    }

    /// Remove a customer, returning its record if it was present.
    pub fn remove(&mut self, id: CustomerId) -> Option<Customer> {
        self.customers.remove(&id)
    }

    /// Whether a customer with this id is registered.
    pub fn contains(&self, id: CustomerId) -> bool {
        self.customers.contains_key(&id)
    }

    /// Number of registered customers.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the directory has no customers.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerDirectory for InMemoryDirectory {
    fn lookup(&self, id: CustomerId) -> Result<&Customer, DirectoryError> {
        self.customers
            .get(&id)
            .ok_or(DirectoryError::CustomerNotFound(id))
    }

    fn update_status(
        &mut self,
        id: CustomerId,
        status: DeliveryStatus,
    ) -> Result<(), DirectoryError> {
        let customer = self
            .customers
            .get_mut(&id)
            .ok_or(DirectoryError::CustomerNotFound(id))?;
        customer.status = status;
        Ok(())
    }
}

impl FromIterator<Customer> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        let mut directory = Self::new();
        for customer in iter {
            directory.insert(customer);
        }
        directory
    }
}
