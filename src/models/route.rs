//! Finalized, depot-wrapped routes.

use super::point::DEPOT_ID;

/// An ordered sequence of stops served by one vehicle, framed by the depot.
///
/// The stored sequence always starts and ends with the depot and contains
/// no other depot occurrence.
///
/// # Examples
///
/// ```
/// use u_savings::models::Route;
///
/// let route = Route::from_chain(vec![3, 1]);
/// assert_eq!(route.stops(), &[0, 3, 1, 0]);
/// assert_eq!(route.clients(), &[3, 1]);
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Wraps a depot-free chain of client ids as `[0] + chain + [0]`.
    pub fn from_chain(chain: Vec<usize>) -> Self {
        let mut stops = Vec::with_capacity(chain.len() + 2);
        stops.push(DEPOT_ID);
        stops.extend(chain.into_iter().filter(|&id| id != DEPOT_ID));
        stops.push(DEPOT_ID);
        Self { stops }
    }

    /// Full stop sequence including both depot visits.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Client ids in visit order (depot excluded).
    pub fn clients(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// First client of the route, if any.
    pub fn first_client(&self) -> Option<usize> {
        self.clients().first().copied()
    }

    /// Consecutive `(from, to)` legs, including the two depot legs.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of clients on this route.
    pub fn len(&self) -> usize {
        self.stops.len() - 2
    }

    /// Returns `true` if the route visits no client.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
