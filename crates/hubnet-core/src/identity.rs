//! # Hub & Customer Identifiers
//!
//! Newtypes for the two addressing primitives of the delivery network:
//! a [`HubLabel`] names a vertex of the graph, a [`CustomerId`] keys the
//! customer directory.
//!
//! ## Validation
//!
//! [`HubLabel`] is validated to be non-empty at construction time, including
//! when deserialized. [`CustomerId`] is any unsigned integer.

use std::borrow::Borrow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The label of a hub (vertex) in the delivery network, e.g. `"A"`.
///
/// Labels are compared exactly; `"a"` and `"A"` are different hubs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HubLabel(String);

impl HubLabel {
    /// Create a hub label, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyHubLabel`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyHubLabel);
        }
        Ok(Self(s))
    }

    /// Access the label string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HubLabel {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for HubLabel {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for HubLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<HubLabel> for String {
    fn from(label: HubLabel) -> Self {
        label.0
    }
}

impl Borrow<str> for HubLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HubLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HubLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HubLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for HubLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer identifier, the key of the customer directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    /// Wrap a raw customer number.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw customer number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
