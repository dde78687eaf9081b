//! Property-based tests for the savings planner.
//!
//! # Invariants tested
//!
//! - **Partition:** every client lands on exactly one route, exactly once.
//! - **Capacity:** multi-client routes never exceed capacity.
//! - **Depot framing:** routes start and end at the depot and visit it nowhere else.
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Determinism:** identical inputs give identical plans.

use proptest::prelude::*;
use u_savings::config::PlannerConfig;
use u_savings::constructive::MergePolicy;
use u_savings::distance::DistanceOracle;
use u_savings::models::{Capacity, Point, PointSet, DEPOT_ID};
use u_savings::planner::{plan_routes, Plan};

/// Clients scattered around a depot, with sparse ids.
fn point_set_strategy() -> impl Strategy<Value = PointSet> {
    prop::collection::vec((36.0f64..37.0, 10.0f64..11.0, 1u32..=15), 0..20).prop_map(|clients| {
        let mut points = vec![Point::depot("Depot", 36.5, 10.5)];
        for (k, (lat, lon, demand)) in clients.into_iter().enumerate() {
            let id = 3 * (k + 1);
            points.push(Point::new(id, format!("C{id}"), lat, lon, demand, "12/03/2025"));
        }
        PointSet::new(points).expect("generated points are valid")
    })
}

fn policy_strategy() -> impl Strategy<Value = MergePolicy> {
    prop_oneof![Just(MergePolicy::TailToHead), Just(MergePolicy::AnyEndpoint)]
}

fn plan(points: &PointSet, capacity: u32, policy: MergePolicy) -> Plan {
    let config = PlannerConfig::new(Capacity::new(capacity).expect("positive"))
        .with_merge_policy(policy);
    plan_routes(points, &config).expect("plan")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_client_served_exactly_once(
        points in point_set_strategy(),
        capacity in 1u32..=40,
        policy in policy_strategy(),
    ) {
        let plan = plan(&points, capacity, policy);
        let mut served: Vec<usize> = plan
            .routes()
            .iter()
            .flat_map(|r| r.route.clients().iter().copied())
            .collect();
        served.sort_unstable();
        let mut expected = points.client_ids();
        expected.sort_unstable();
        prop_assert_eq!(served, expected);
    }

    #[test]
    fn merged_routes_respect_capacity(
        points in point_set_strategy(),
        capacity in 1u32..=40,
        policy in policy_strategy(),
    ) {
        let plan = plan(&points, capacity, policy);
        for planned in plan.routes() {
            let load = points.total_demand(planned.route.clients());
            prop_assert_eq!(load, planned.metrics.load);
            if planned.route.len() > 1 {
                prop_assert!(load <= u64::from(capacity));
            } else if load > u64::from(capacity) {
                prop_assert!(planned.metrics.utilization > 100.0);
            }
        }
    }

    #[test]
    fn routes_are_framed_by_the_depot(
        points in point_set_strategy(),
        capacity in 1u32..=40,
        policy in policy_strategy(),
    ) {
        let plan = plan(&points, capacity, policy);
        for planned in plan.routes() {
            let stops = planned.route.stops();
            prop_assert!(stops.len() >= 3);
            prop_assert_eq!(stops[0], DEPOT_ID);
            prop_assert_eq!(stops[stops.len() - 1], DEPOT_ID);
            prop_assert!(stops[1..stops.len() - 1].iter().all(|&id| id != DEPOT_ID));
        }
    }

    #[test]
    fn distance_is_symmetric(points in point_set_strategy()) {
        let oracle = DistanceOracle::new(&points);
        let ids: Vec<usize> = points.points().iter().map(Point::id).collect();
        for &a in &ids {
            for &b in &ids {
                let ab = oracle.distance(a, b).expect("known ids");
                let ba = oracle.distance(b, a).expect("known ids");
                prop_assert_eq!(ab, ba);
                prop_assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn planning_is_deterministic(
        points in point_set_strategy(),
        capacity in 1u32..=40,
        policy in policy_strategy(),
    ) {
        let first = plan(&points, capacity, policy);
        let second = plan(&points, capacity, policy);
        prop_assert_eq!(first, second);
    }
}
