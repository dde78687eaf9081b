//! Geographic distances between stops.
//!
//! Provides a memoized geodesic distance oracle scoped to one point set.

mod oracle;

pub use oracle::{geodesic_km, DistanceOracle};
