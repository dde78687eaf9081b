//! One end-to-end planning run.

use tracing::{debug, info, info_span};

use crate::config::PlannerConfig;
use crate::constructive::{build_routes, generate_savings};
use crate::distance::DistanceOracle;
use crate::error::PlanError;
use crate::evaluation::{RouteEvaluator, RouteMetrics};
use crate::models::{Capacity, PointSet, Route};

/// A finalized route together with its metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    /// Depot-wrapped stop sequence.
    pub route: Route,
    /// Distance, load, utilization, and label.
    pub metrics: RouteMetrics,
}

/// The outcome of a planning run, routes in finalization order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    routes: Vec<PlannedRoute>,
    capacity: Capacity,
}

impl Plan {
    /// Planned routes in finalization order.
    pub fn routes(&self) -> &[PlannedRoute] {
        &self.routes
    }

    /// Capacity the plan was built against.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Number of routes (vehicles dispatched).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of clients served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.route.len()).sum()
    }

    /// Total kilometres across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.metrics.distance_km).sum()
    }
}

/// Plans depot routes for a point set with the Clarke-Wright heuristic.
///
/// A fresh [`DistanceOracle`] is created for the run, so no cached distance
/// leaks between point sets.
///
/// # Examples
///
/// ```
/// use u_savings::config::PlannerConfig;
/// use u_savings::models::{Capacity, Point, PointSet};
/// use u_savings::planner::plan_routes;
///
/// let points = PointSet::new(vec![
///     Point::depot("Depot", 36.80, 10.18),
///     Point::new(1, "A", 36.82, 10.20, 5, "12/03/2025"),
///     Point::new(2, "B", 36.84, 10.22, 5, "12/03/2025"),
/// ]).unwrap();
/// let plan = plan_routes(&points, &PlannerConfig::new(Capacity::new(25).unwrap())).unwrap();
/// assert_eq!(plan.num_served(), 2);
/// ```
pub fn plan_routes(points: &PointSet, config: &PlannerConfig) -> Result<Plan, PlanError> {
    let span = info_span!(
        "plan_routes",
        clients = points.num_clients(),
        capacity = config.capacity.get(),
        policy = %config.merge_policy
    );
    let _guard = span.enter();

    let oracle = DistanceOracle::new(points);
    let savings = generate_savings(&oracle)?;
    debug!(savings = savings.len(), "generated savings");

    let routes = build_routes(points, &savings, config.capacity, config.merge_policy);

    let evaluator = RouteEvaluator::new(&oracle, config.capacity);
    let routes = routes
        .into_iter()
        .map(|route| {
            let metrics = evaluator.metrics(&route)?;
            Ok(PlannedRoute { route, metrics })
        })
        .collect::<Result<Vec<_>, PlanError>>()?;

    let plan = Plan {
        routes,
        capacity: config.capacity,
    };
    info!(
        routes = plan.num_routes(),
        served = plan.num_served(),
        distance_km = plan.total_distance(),
        cached_pairs = oracle.cached_pairs(),
        "planning complete"
    );
    Ok(plan)
}
