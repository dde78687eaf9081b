//! Located stops (depot and clients).

use serde::{Deserialize, Serialize};

/// Id reserved for the depot.
pub const DEPOT_ID: usize = 0;

/// A located stop in a delivery problem.
///
/// Point 0 is the depot. Clients carry a demand in capacity units and an
/// opaque delivery date label that routing never interprets.
///
/// # Examples
///
/// ```
/// use u_savings::models::Point;
///
/// let depot = Point::depot("Warehouse", 36.80, 10.18);
/// assert!(depot.is_depot());
/// assert_eq!(depot.demand(), 0);
///
/// let c = Point::new(1, "Client A", 36.85, 10.20, 4, "12/03/2025");
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    name: String,
    latitude: f64,
    longitude: f64,
    demand: u32,
    delivery_date: String,
}

impl Point {
    /// Creates a new point.
    pub fn new(
        id: usize,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        demand: u32,
        delivery_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            demand,
            delivery_date: delivery_date.into(),
        }
    }

    /// Creates the depot (id 0, no demand, no date).
    pub fn depot(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::new(DEPOT_ID, name, latitude, longitude, 0, "")
    }

    /// Point id (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Capacity units consumed when this point is visited.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Scheduling label carried through to reports.
    pub fn delivery_date(&self) -> &str {
        &self.delivery_date
    }

    /// Returns `true` if this point is the depot.
    pub fn is_depot(&self) -> bool {
        self.id == DEPOT_ID
    }

    /// Returns `true` if the coordinates are finite and within WGS84 bounds.
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}
