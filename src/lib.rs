//! # u-savings
//!
//! Capacity-constrained delivery route planning from a single depot with
//! the Clarke-Wright savings heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSet, Capacity, Route)
//! - [`distance`] — Memoized geodesic distance oracle
//! - [`constructive`] — Savings generation and the Clarke-Wright route builder
//! - [`evaluation`] — Route distance, utilization, and client labels
//! - [`planner`] — One end-to-end planning run
//! - [`io`] — CSV ingestion, report records, and route history
//! - [`config`] — Planner configuration
//! - [`error`] — Error taxonomy

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod planner;

pub use error::PlanError;
