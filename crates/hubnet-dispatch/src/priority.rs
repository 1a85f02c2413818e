//! # Priority Scoring
//!
//! `priority = (tier_ceiling - tier) + travel_time_scale / travel_time`
//!
//! Lower tiers (more urgent) and shorter travel times both raise the score.
//! The two terms are summed, not compared lexicographically, so a distant
//! tier-1 customer can rank below a nearby tier-5 one. With the default
//! scale of 1000 the time term dominates for short routes.

use hubnet_core::{PriorityTier, ValidationError};
use serde::{Deserialize, Serialize};

/// Default tier ceiling: one above the least urgent tier.
pub const DEFAULT_TIER_CEILING: u8 = 6;

/// Default travel-time scale.
pub const DEFAULT_TRAVEL_TIME_SCALE: f64 = 1000.0;

/// The two tunable constants of the priority formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityPolicy {
    /// Subtracted from by the customer's tier.
    pub tier_ceiling: u8,
    /// Numerator of the travel-time term.
    pub travel_time_scale: f64,
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self {
            tier_ceiling: DEFAULT_TIER_CEILING,
            travel_time_scale: DEFAULT_TRAVEL_TIME_SCALE,
        }
    }
}

impl PriorityPolicy {
    /// Check that the travel-time scale is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTravelTimeScale`] otherwise.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.travel_time_scale > 0.0 && self.travel_time_scale.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::InvalidTravelTimeScale(self.travel_time_scale))
        }
    }

    /// Score a request. `travel_time` must be positive; admission guarantees it.
    pub fn score(&self, tier: PriorityTier, travel_time: f64) -> f64 {
        let urgency = f64::from(self.tier_ceiling) - f64::from(tier.get());
        urgency + self.travel_time_scale / travel_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(t: i64) -> PriorityTier {
        PriorityTier::new(t).unwrap()
    }

    #[test]
    fn default_formula() {
        let policy = PriorityPolicy::default();
        assert_eq!(policy.score(tier(1), 2.0), 505.0);
        assert_eq!(policy.score(tier(5), 2.0), 501.0);
        assert_eq!(policy.score(tier(3), 1000.0), 4.0);
    }

    #[test]
    fn shorter_travel_time_can_outrank_urgency() {
        let policy = PriorityPolicy::default();
        assert!(policy.score(tier(5), 10.0) > policy.score(tier(1), 20.0));
    }

    #[test]
    fn custom_constants() {
        let policy = PriorityPolicy {
            tier_ceiling: 10,
            travel_time_scale: 1.0,
        };
        assert_eq!(policy.score(tier(2), 4.0), 8.25);
    }

    #[test]
    fn validate_rejects_bad_scale() {
        for scale in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let policy = PriorityPolicy {
                travel_time_scale: scale,
                ..PriorityPolicy::default()
            };
            assert!(policy.validate().is_err());
        }
        assert!(PriorityPolicy::default().validate().is_ok());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let policy: PriorityPolicy = serde_json::from_str(r#"{"travel_time_scale": 50.0}"#).unwrap();
        assert_eq!(policy.tier_ceiling, DEFAULT_TIER_CEILING);
        assert_eq!(policy.travel_time_scale, 50.0);
    }
}
