//! Savings-based route construction.
//!
//! - [`generate_savings`] — one savings score per unordered client pair, O(n²)
//! - [`build_routes`] — Clarke-Wright greedy merge (1964), O(n² log n)

mod clarke_wright;
mod savings;

pub use clarke_wright::{build_routes, MergePolicy};
pub use savings::{generate_savings, Saving};
