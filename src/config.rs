//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::MergePolicy;
use crate::models::Capacity;

/// Parameters of one planning run.
///
/// Deserializes from any serde format; missing fields take their defaults
/// (capacity 25, tail-to-head merging).
///
/// # Examples
///
/// ```
/// use u_savings::config::PlannerConfig;
/// use u_savings::constructive::MergePolicy;
/// use u_savings::models::Capacity;
///
/// let config = PlannerConfig::new(Capacity::new(12).unwrap())
///     .with_merge_policy(MergePolicy::AnyEndpoint);
/// assert_eq!(config.capacity.get(), 12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Per-route demand ceiling.
    pub capacity: Capacity,
    /// Endpoint rule applied when merging chains.
    pub merge_policy: MergePolicy,
}

impl PlannerConfig {
    /// Creates a configuration with the default merge policy.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            capacity,
            merge_policy: MergePolicy::default(),
        }
    }

    /// Sets the merge policy.
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }
}
