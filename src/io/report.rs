//! Report records handed to the planner and the route history.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::PointSet;
use crate::planner::Plan;

const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M:%S"];

/// One row of the route report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Delivery date of the route's first client, `DD/MM/YYYY` when parseable.
    pub date: String,
    /// Route number, starting at 1 in finalization order.
    pub route: usize,
    /// Client names in visit order.
    pub clients: String,
    /// Demand used over capacity, as `used/capacity`.
    pub load: String,
    /// Utilization percentage, one decimal.
    pub utilization_pct: f64,
    /// Route length in kilometres, two decimals.
    pub distance_km: f64,
}

/// Rounds half away from zero to the given number of decimals.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Normalizes a delivery date label to `DD/MM/YYYY`.
///
/// Day-first and ISO dates are recognized, with or without a time part.
/// Anything else is returned unchanged, trimmed.
///
/// # Examples
///
/// ```
/// use u_savings::io::normalize_date;
///
/// assert_eq!(normalize_date("2025-03-12"), "12/03/2025");
/// assert_eq!(normalize_date("12-03-2025"), "12/03/2025");
/// assert_eq!(normalize_date("next monday"), "next monday");
/// ```
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
                .map(|dt| dt.date())
        });
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Builds one report record per planned route, in plan order.
///
/// The date comes from the route's first client; other clients on the
/// route are assumed to share it.
pub fn route_records(plan: &Plan, points: &PointSet) -> Vec<RouteRecord> {
    plan.routes()
        .iter()
        .enumerate()
        .map(|(idx, planned)| {
            let date = planned
                .route
                .first_client()
                .and_then(|id| points.get(id))
                .map(|p| normalize_date(p.delivery_date()))
                .unwrap_or_default();
            let m = &planned.metrics;
            RouteRecord {
                date,
                route: idx + 1,
                clients: m.clients_label.clone(),
                load: format!("{}/{}", m.load, m.capacity),
                utilization_pct: round_to(m.utilization, 1),
                distance_km: round_to(m.distance_km, 2),
            }
        })
        .collect()
}
