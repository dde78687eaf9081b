//! Route evaluation: distance, capacity utilization, and client labels.

mod evaluator;

pub use evaluator::{RouteEvaluator, RouteMetrics, CLIENT_SEPARATOR};
