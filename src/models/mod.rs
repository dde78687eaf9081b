//! Domain model types for depot-based delivery routing.
//!
//! Provides the core abstractions: located points with demands, the
//! validated point set of one run, the vehicle capacity ceiling, and
//! finalized depot-wrapped routes.

mod capacity;
mod point;
mod point_set;
mod route;

pub use capacity::Capacity;
pub use point::{Point, DEPOT_ID};
pub use point_set::PointSet;
pub use route::Route;
