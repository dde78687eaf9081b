//! End-to-end planning scenarios through the public API.

use u_savings::config::PlannerConfig;
use u_savings::constructive::{build_routes, MergePolicy, Saving};
use u_savings::io::{read_point_set, route_records, RouteHistory};
use u_savings::models::{Capacity, Point, PointSet};
use u_savings::planner::plan_routes;
use u_savings::PlanError;

fn config(units: u32) -> PlannerConfig {
    PlannerConfig::new(Capacity::new(units).expect("positive"))
}

fn stops(points: &PointSet, units: u32) -> Vec<Vec<usize>> {
    plan_routes(points, &config(units))
        .expect("plan")
        .routes()
        .iter()
        .map(|r| r.route.stops().to_vec())
        .collect()
}

#[test]
fn collinear_clients_share_one_route() {
    let points = PointSet::new(vec![
        Point::depot("Depot", 0.0, 0.0),
        Point::new(1, "Near", 0.0, 1.0, 1, ""),
        Point::new(2, "Far", 0.0, 2.0, 1, ""),
    ])
    .expect("valid");
    assert_eq!(stops(&points, 5), vec![vec![0, 1, 2, 0]]);
}

#[test]
fn combined_demand_over_capacity_stays_split() {
    let points = PointSet::new(vec![
        Point::depot("Depot", 0.0, 0.0),
        Point::new(1, "Near", 0.0, 1.0, 3, ""),
        Point::new(2, "Far", 0.0, 2.0, 3, ""),
    ])
    .expect("valid");
    assert_eq!(stops(&points, 5), vec![vec![0, 1, 0], vec![0, 2, 0]]);
}

#[test]
fn oversized_client_ships_alone_over_full() {
    let points = PointSet::new(vec![
        Point::depot("Depot", 36.80, 10.18),
        Point::new(1, "Bulk", 36.85, 10.25, 30, "12/03/2025"),
    ])
    .expect("valid");
    let plan = plan_routes(&points, &config(25)).expect("plan");
    assert_eq!(plan.num_routes(), 1);
    assert_eq!(plan.routes()[0].metrics.utilization, 120.0);
    let records = route_records(&plan, &points);
    assert_eq!(records[0].utilization_pct, 120.0);
    assert_eq!(records[0].load, "30/25");
}

#[test]
fn depot_only_yields_no_routes() {
    let points = PointSet::new(vec![Point::depot("Depot", 36.80, 10.18)]).expect("valid");
    let plan = plan_routes(&points, &config(25)).expect("plan");
    assert_eq!(plan.num_routes(), 0);
    assert!(route_records(&plan, &points).is_empty());
}

#[test]
fn tail_to_head_rule_strands_a_client() {
    let mut raw = vec![Point::depot("Depot", 0.0, 0.0)];
    for id in 1..=4 {
        raw.push(Point::new(id, format!("C{id}"), 0.0, 0.1 * id as f64, 1, ""));
    }
    let points = PointSet::new(raw).expect("valid");
    let savings = [
        Saving::new(1, 2, 10.0),
        Saving::new(2, 4, 9.0),
        Saving::new(1, 3, 8.0),
        Saving::new(2, 3, 7.0),
        Saving::new(3, 4, 6.0),
    ];
    let cap = Capacity::new(10).expect("positive");

    let strict: Vec<_> = build_routes(&points, &savings, cap, MergePolicy::TailToHead)
        .iter()
        .map(|r| r.stops().to_vec())
        .collect();
    assert_eq!(strict, vec![vec![0, 3, 0], vec![0, 1, 2, 4, 0]]);

    let classical = build_routes(&points, &savings, cap, MergePolicy::AnyEndpoint);
    assert_eq!(classical.len(), 1);
    assert_eq!(classical[0].stops(), &[0, 3, 1, 2, 4, 0]);
}

#[test]
fn csv_to_history_round_trip() {
    let csv = "id,name,latitude,longitude,demand,delivery_date\n\
               0,Depot,36.8065,10.1815,,\n\
               1,Ariana,36.8665,10.1647,8,2025-03-12\n\
               2,La Marsa,36.8782,10.3247,6,2025-03-12\n\
               3,Ben Arous,36.7531,10.2189,9,2025-03-12\n\
               4,Manouba,36.8101,10.0956,12,2025-03-12\n";
    let points = read_point_set(csv.as_bytes()).expect("valid csv");
    let plan = plan_routes(&points, &config(20)).expect("plan");
    assert_eq!(plan.num_served(), 4);

    let records = route_records(&plan, &points);
    assert_eq!(records.len(), plan.num_routes());
    assert!(records.iter().all(|r| r.date == "12/03/2025"));
    assert!(records
        .iter()
        .enumerate()
        .all(|(idx, r)| r.route == idx + 1));

    let dir = tempfile::tempdir().expect("tempdir");
    let history = RouteHistory::new(dir.path().join("data").join("routes.csv"));
    history.append(&records).expect("first save");
    history.append(&records).expect("second save");
    assert_eq!(history.load().expect("load").len(), 2 * records.len());
}

#[test]
fn missing_depot_aborts_the_run() {
    let csv = "id,name,latitude,longitude,demand,delivery_date\n\
               1,Ariana,36.8665,10.1647,8,2025-03-12\n";
    let err = read_point_set(csv.as_bytes()).expect_err("no depot");
    assert!(matches!(err, PlanError::MissingDepot));
    assert!(err.is_input_error());
}
