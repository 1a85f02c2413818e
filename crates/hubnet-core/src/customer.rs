//! # Customer Records
//!
//! A customer carries a [`PriorityTier`] (1 is the most urgent, 5 the least)
//! and a free-text delivery status. Status spellings in upstream data vary
//! (`In_Transit`, `In Transit`, `Delayed_`, ...), so [`DeliveryStatus`]
//! normalizes them once at the directory boundary; the scheduler only ever
//! compares normalized values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::CustomerId;

/// Customer urgency tier, 1 (most urgent) through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PriorityTier(u8);

impl PriorityTier {
    /// Most urgent tier.
    pub const MOST_URGENT: Self = Self(1);
    /// Least urgent tier.
    pub const LEAST_URGENT: Self = Self(5);

    /// Create a tier, validating the 1..=5 range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPriorityTier`] for any value outside 1..=5.
    pub fn new(tier: i64) -> Result<Self, ValidationError> {
        match u8::try_from(tier) {
            Ok(t @ 1..=5) => Ok(Self(t)),
            _ => Err(ValidationError::InvalidPriorityTier(tier)),
        }
    }

    /// The numeric tier.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PriorityTier {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriorityTier> for u8 {
    fn from(tier: PriorityTier) -> Self {
        tier.0
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized delivery status of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryStatus {
    /// Parcel is moving through the network.
    InTransit,
    /// Parcel is held up and still owed a delivery.
    Delayed,
    /// Parcel has reached the customer.
    Delivered,
    /// Parcel has not left the warehouse.
    Pending,
    /// Any other status, kept verbatim (trimmed).
    Other(String),
}

impl DeliveryStatus {
    /// Parse a free-text status.
    ///
    /// Matching is case-insensitive and treats `_`, `-` and runs of
    /// whitespace as a single separator; trailing separators are ignored.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw
            .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "in transit" | "intransit" => Self::InTransit,
            "delayed" => Self::Delayed,
            "delivered" => Self::Delivered,
            "pending" => Self::Pending,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Human-readable form, parseable back by [`DeliveryStatus::parse`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::InTransit => "In Transit",
            Self::Delayed => "Delayed",
            Self::Delivered => "Delivered",
            Self::Pending => "Pending",
            Self::Other(s) => s,
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for DeliveryStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DeliveryStatus> for String {
    fn from(status: DeliveryStatus) -> Self {
        match status {
            DeliveryStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer record as held by a [`CustomerDirectory`](crate::CustomerDirectory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Directory key.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Urgency tier.
    pub tier: PriorityTier,
    /// Current delivery status.
    pub status: DeliveryStatus,
}

impl Customer {
    /// Create a customer record.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        address: impl Into<String>,
        tier: PriorityTier,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            tier,
            status,
        }
    }
}
