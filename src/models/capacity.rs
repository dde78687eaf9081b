//! Per-route demand ceiling.

use serde::{Deserialize, Serialize};

/// Maximum total demand a single route may carry.
///
/// Always strictly positive, so utilization never divides by zero.
///
/// # Examples
///
/// ```
/// use u_savings::models::Capacity;
///
/// let cap = Capacity::new(25).unwrap();
/// assert_eq!(cap.get(), 25);
/// assert!(Capacity::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(u32);

impl Capacity {
    /// Creates a capacity. Returns `None` for zero.
    pub fn new(units: u32) -> Option<Self> {
        (units > 0).then_some(Self(units))
    }

    /// Capacity in demand units.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` if `load` fits within this capacity.
    pub fn admits(self, load: u64) -> bool {
        load <= u64::from(self.0)
    }

    /// Load as a percentage of this capacity.
    pub fn utilization(self, load: u64) -> f64 {
        (load as f64 * 100.0) / f64::from(self.0)
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self(25)
    }
}

impl TryFrom<u32> for Capacity {
    type Error = crate::error::PlanError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Self::new(units).ok_or(crate::error::PlanError::InvalidCapacity(units))
    }
}

impl From<Capacity> for u32 {
    fn from(cap: Capacity) -> Self {
        cap.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_new() {
        assert_eq!(Capacity::new(5).map(Capacity::get), Some(5));
        assert!(Capacity::new(0).is_none());
        assert!(Capacity::try_from(0).is_err());
    }

    #[test]
    fn test_admits() {
        let cap = Capacity::new(5).expect("positive");
        assert!(cap.admits(5));
        assert!(!cap.admits(6));
    }

    #[test]
    fn test_utilization() {
        let cap = Capacity::new(25).expect("positive");
        assert_eq!(cap.utilization(30), 120.0);
        assert_eq!(cap.utilization(0), 0.0);
        assert!((cap.utilization(10) - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_default() {
        assert_eq!(Capacity::default().get(), 25);
    }
}
