//! Memoized geodesic distances between points of one point set.

use std::cell::RefCell;
use std::collections::HashMap;

use geo::{Distance, Geodesic};

use crate::error::PlanError;
use crate::models::{Point, PointSet};

/// Geodesic distance in kilometres on the WGS84 ellipsoid.
///
/// # Examples
///
/// ```
/// use u_savings::models::Point;
/// use u_savings::distance::geodesic_km;
///
/// let a = Point::new(1, "a", 0.0, 0.0, 1, "");
/// let b = Point::new(2, "b", 0.0, 1.0, 1, "");
/// // One degree of longitude along the equator.
/// assert!((geodesic_km(&a, &b) - 111.319).abs() < 1e-3);
/// ```
pub fn geodesic_km(a: &Point, b: &Point) -> f64 {
    let from = geo::Point::new(a.longitude(), a.latitude());
    let to = geo::Point::new(b.longitude(), b.latitude());
    Geodesic.distance(from, to) / 1000.0
}

/// Distance oracle scoped to a single [`PointSet`].
///
/// Results are cached by unordered id pair, so `distance(a, b)` and
/// `distance(b, a)` share one entry and are bit-identical. The cache is keyed
/// by id only; the borrow on the point set ties its lifetime to that set.
///
/// The cache uses a `RefCell`, so an oracle is not `Sync`. Build one oracle
/// per thread if planning runs in parallel.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Point, PointSet};
/// use u_savings::distance::DistanceOracle;
///
/// let points = PointSet::new(vec![
///     Point::depot("Depot", 0.0, 0.0),
///     Point::new(1, "A", 0.0, 1.0, 1, ""),
/// ]).unwrap();
/// let oracle = DistanceOracle::new(&points);
/// let d = oracle.distance(0, 1).unwrap();
/// assert_eq!(d, oracle.distance(1, 0).unwrap());
/// assert_eq!(oracle.cached_pairs(), 1);
/// ```
#[derive(Debug)]
pub struct DistanceOracle<'a> {
    points: &'a PointSet,
    cache: RefCell<HashMap<(usize, usize), f64>>,
}

impl<'a> DistanceOracle<'a> {
    /// Creates an oracle with an empty cache.
    pub fn new(points: &'a PointSet) -> Self {
        Self {
            points,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// The point set this oracle measures.
    pub fn points(&self) -> &'a PointSet {
        self.points
    }

    /// Distance in kilometres between two points.
    ///
    /// Fails with [`PlanError::UnknownPoint`] if either id is absent.
    pub fn distance(&self, a: usize, b: usize) -> Result<f64, PlanError> {
        let from = self.points.require(a)?;
        let to = self.points.require(b)?;
        if a == b {
            return Ok(0.0);
        }

        let key = (a.min(b), a.max(b));
        if let Some(&d) = self.cache.borrow().get(&key) {
            return Ok(d);
        }

        let d = geodesic_km(from, to);
        self.cache.borrow_mut().insert(key, d);
        Ok(d)
    }

    /// Number of distinct pairs currently cached.
    pub fn cached_pairs(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Drops every cached distance.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}
