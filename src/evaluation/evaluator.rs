//! Route evaluator that computes distance, load, and utilization.

use serde::Serialize;

use crate::distance::DistanceOracle;
use crate::error::PlanError;
use crate::models::{Capacity, PointSet, Route};

/// Separator placed between client names in a route label.
pub const CLIENT_SEPARATOR: &str = " → ";

/// Read-only figures derived from a finalized route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMetrics {
    /// Kilometres travelled, both depot legs included.
    pub distance_km: f64,
    /// Sum of the clients' demands.
    pub load: u64,
    /// Capacity the route was built against.
    pub capacity: u32,
    /// `100 * load / capacity`; above 100 only for an over-capacity singleton.
    pub utilization: f64,
    /// Client names in visit order.
    pub clients_label: String,
}

/// Evaluates finalized routes against one point set and capacity.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Capacity, Point, PointSet, Route};
/// use u_savings::distance::DistanceOracle;
/// use u_savings::evaluation::RouteEvaluator;
///
/// let points = PointSet::new(vec![
///     Point::depot("Depot", 0.0, 0.0),
///     Point::new(1, "A", 0.0, 1.0, 10, ""),
///     Point::new(2, "B", 0.0, 2.0, 5, ""),
/// ]).unwrap();
/// let oracle = DistanceOracle::new(&points);
/// let evaluator = RouteEvaluator::new(&oracle, Capacity::new(25).unwrap());
///
/// let m = evaluator.metrics(&Route::from_chain(vec![1, 2])).unwrap();
/// assert_eq!(m.load, 15);
/// assert_eq!(m.utilization, 60.0);
/// assert_eq!(m.clients_label, "A → B");
/// ```
pub struct RouteEvaluator<'o, 'p> {
    oracle: &'o DistanceOracle<'p>,
    capacity: Capacity,
}

impl<'o, 'p> RouteEvaluator<'o, 'p> {
    /// Creates an evaluator. `capacity` must be the one used to build the routes.
    pub fn new(oracle: &'o DistanceOracle<'p>, capacity: Capacity) -> Self {
        Self { oracle, capacity }
    }

    fn points(&self) -> &'p PointSet {
        self.oracle.points()
    }

    /// Total distance of a route, summing every consecutive leg.
    pub fn route_distance(&self, route: &Route) -> Result<f64, PlanError> {
        route
            .legs()
            .try_fold(0.0, |acc, (from, to)| Ok(acc + self.oracle.distance(from, to)?))
    }

    /// Computes distance, load, utilization, and the client label of a route.
    ///
    /// Fails with [`PlanError::UnknownPoint`] if the route references an id
    /// outside the point set.
    pub fn metrics(&self, route: &Route) -> Result<RouteMetrics, PlanError> {
        let distance_km = self.route_distance(route)?;

        let mut load = 0u64;
        let mut names = Vec::with_capacity(route.len());
        for &cid in route.clients() {
            let point = self.points().require(cid)?;
            load += u64::from(point.demand());
            names.push(point.name());
        }

        Ok(RouteMetrics {
            distance_km,
            load,
            capacity: self.capacity.get(),
            utilization: self.capacity.utilization(load),
            clients_label: names.join(CLIENT_SEPARATOR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn setup() -> PointSet {
        PointSet::new(vec![
            Point::depot("Depot", 0.0, 0.0),
            Point::new(1, "Alpha", 0.0, 1.0, 10, "12/03/2025"),
            Point::new(2, "Beta", 0.0, 2.0, 5, "12/03/2025"),
            Point::new(3, "Gamma", 0.0, 0.5, 30, "13/03/2025"),
        ])
        .expect("valid")
    }

    fn cap(units: u32) -> Capacity {
        Capacity::new(units).expect("positive")
    }

    #[test]
    fn test_metrics_single() {
        let ps = setup();
        let oracle = DistanceOracle::new(&ps);
        let eval = RouteEvaluator::new(&oracle, cap(25));
        let m = eval.metrics(&Route::from_chain(vec![1])).expect("known ids");
        let d01 = oracle.distance(0, 1).expect("known ids");
        assert!((m.distance_km - 2.0 * d01).abs() < 1e-9);
        assert_eq!(m.load, 10);
        assert_eq!(m.capacity, 25);
        assert!((m.utilization - 40.0).abs() < 1e-10);
        assert_eq!(m.clients_label, "Alpha");
    }

    #[test]
    fn test_metrics_sums_all_legs() {
        let ps = setup();
        let oracle = DistanceOracle::new(&ps);
        let eval = RouteEvaluator::new(&oracle, cap(25));
        let m = eval.metrics(&Route::from_chain(vec![1, 2])).expect("known ids");
        // Collinear along the equator: out 2 degrees and back 2 degrees.
        let d02 = oracle.distance(0, 2).expect("known ids");
        assert!((m.distance_km - 2.0 * d02).abs() < 1e-6);
        assert_eq!(m.clients_label, "Alpha → Beta");
        assert!((m.utilization - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_over_capacity_utilization() {
        let ps = setup();
        let oracle = DistanceOracle::new(&ps);
        let eval = RouteEvaluator::new(&oracle, cap(25));
        let m = eval.metrics(&Route::from_chain(vec![3])).expect("known ids");
        assert_eq!(m.load, 30);
        assert_eq!(m.utilization, 120.0);
    }

    #[test]
    fn test_unknown_client() {
        let ps = setup();
        let oracle = DistanceOracle::new(&ps);
        let eval = RouteEvaluator::new(&oracle, cap(25));
        assert!(matches!(
            eval.metrics(&Route::from_chain(vec![1, 77])),
            Err(PlanError::UnknownPoint(77))
        ));
    }

    #[test]
    fn test_empty_route() {
        let ps = setup();
        let oracle = DistanceOracle::new(&ps);
        let eval = RouteEvaluator::new(&oracle, cap(25));
        let m = eval.metrics(&Route::from_chain(Vec::new())).expect("depot known");
        assert_eq!(m.distance_km, 0.0);
        assert_eq!(m.load, 0);
        assert!(m.clients_label.is_empty());
    }
}
