//! Pairwise savings scores.
//!
//! For two clients `i` and `j`, the saving of serving them consecutively on
//! one route instead of two separate depot round-trips is:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! # Complexity
//!
//! O(n²) in the number of clients.

use crate::distance::DistanceOracle;
use crate::error::PlanError;
use crate::models::DEPOT_ID;

/// The distance saved by linking clients `i` and `j` directly.
///
/// Generated once per unordered pair, with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    /// Lower client id of the pair.
    pub i: usize,
    /// Higher client id of the pair.
    pub j: usize,
    /// Kilometres saved by the direct link.
    pub score: f64,
}

impl Saving {
    /// Creates a saving for an ordered pair.
    pub fn new(i: usize, j: usize, score: f64) -> Self {
        Self { i, j, score }
    }
}

/// Computes one [`Saving`] per unordered pair of clients.
///
/// Clients are enumerated in point-set order (outer `i`, inner `j`) and only
/// pairs with `i < j` are kept; this enumeration order is the tie-break used
/// by the route builder. Non-positive scores are kept.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Point, PointSet};
/// use u_savings::distance::DistanceOracle;
/// use u_savings::constructive::generate_savings;
///
/// let points = PointSet::new(vec![
///     Point::depot("Depot", 0.0, 0.0),
///     Point::new(1, "A", 0.0, 1.0, 1, ""),
///     Point::new(2, "B", 0.0, 2.0, 1, ""),
/// ]).unwrap();
/// let oracle = DistanceOracle::new(&points);
/// let savings = generate_savings(&oracle).unwrap();
/// assert_eq!(savings.len(), 1);
/// assert!(savings[0].score > 0.0);
/// ```
pub fn generate_savings(oracle: &DistanceOracle<'_>) -> Result<Vec<Saving>, PlanError> {
    let clients = oracle.points().client_ids();
    let n = clients.len();
    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for &i in &clients {
        for &j in &clients {
            if i >= j {
                continue;
            }
            let score = oracle.distance(DEPOT_ID, i)? + oracle.distance(DEPOT_ID, j)?
                - oracle.distance(i, j)?;
            savings.push(Saving::new(i, j, score));
        }
    }

    Ok(savings)
}
