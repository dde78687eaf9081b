//! Validated collection of points for one planning run.

use std::collections::HashMap;

use super::point::{Point, DEPOT_ID};
use crate::error::PlanError;

/// The full, immutable set of points for one optimization run.
///
/// Points keep their input order, which is also the enumeration order used
/// for savings generation and the initial chain layout. Ids are unique and
/// the depot (id 0) is always present.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Point, PointSet};
///
/// let points = PointSet::new(vec![
///     Point::depot("Depot", 0.0, 0.0),
///     Point::new(1, "A", 0.0, 1.0, 2, ""),
///     Point::new(2, "B", 0.0, 2.0, 3, ""),
/// ]).unwrap();
/// assert_eq!(points.num_clients(), 2);
/// assert_eq!(points.get(2).unwrap().demand(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
    index: HashMap<usize, usize>,
}

impl PointSet {
    /// Validates and builds a point set.
    ///
    /// Fails on an empty input, duplicate ids, a missing depot, or
    /// coordinates outside WGS84 bounds.
    pub fn new(points: Vec<Point>) -> Result<Self, PlanError> {
        if points.is_empty() {
            return Err(PlanError::EmptyPointSet);
        }

        let mut index = HashMap::with_capacity(points.len());
        for (pos, p) in points.iter().enumerate() {
            if !p.has_valid_coordinates() {
                return Err(PlanError::InvalidCoordinate {
                    id: p.id(),
                    latitude: p.latitude(),
                    longitude: p.longitude(),
                });
            }
            if index.insert(p.id(), pos).is_some() {
                return Err(PlanError::DuplicateId(p.id()));
            }
        }

        if !index.contains_key(&DEPOT_ID) {
            return Err(PlanError::MissingDepot);
        }

        Ok(Self { points, index })
    }

    /// Looks up a point by id.
    pub fn get(&self, id: usize) -> Option<&Point> {
        self.index.get(&id).map(|&pos| &self.points[pos])
    }

    /// Looks up a point by id, failing with [`PlanError::UnknownPoint`].
    pub fn require(&self, id: usize) -> Result<&Point, PlanError> {
        self.get(id).ok_or(PlanError::UnknownPoint(id))
    }

    /// Returns `true` if a point with this id exists.
    pub fn contains(&self, id: usize) -> bool {
        self.index.contains_key(&id)
    }

    /// The depot point.
    pub fn depot(&self) -> &Point {
        &self.points[self.index[&DEPOT_ID]]
    }

    /// All points in input order, depot included.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Non-depot points in input order.
    pub fn clients(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter().filter(|p| !p.is_depot())
    }

    /// Non-depot ids in input order.
    pub fn client_ids(&self) -> Vec<usize> {
        self.clients().map(Point::id).collect()
    }

    /// Number of non-depot points.
    pub fn num_clients(&self) -> usize {
        self.points.len() - 1
    }

    /// Sum of demands over the given ids; unknown ids count as zero.
    pub fn total_demand(&self, ids: &[usize]) -> u64 {
        ids.iter()
            .filter_map(|&id| self.get(id))
            .map(|p| u64::from(p.demand()))
            .sum()
    }
}
