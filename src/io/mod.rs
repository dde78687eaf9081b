//! Tabular input and output around the planner.
//!
//! - [`read_point_set`] / [`load_point_set`] — CSV stop list to a validated point set
//! - [`route_records`] — report rows for a finished plan
//! - [`RouteHistory`] — cumulative CSV history of planned routes

mod history;
mod ingest;
mod report;

pub use history::RouteHistory;
pub use ingest::{load_point_set, read_point_set};
pub use report::{normalize_date, route_records, RouteRecord};
