//! Clarke-Wright savings route builder.
//!
//! # Algorithm
//!
//! Every client starts on its own chain. Savings are visited once, in
//! decreasing order of score, and the chains holding `i` and `j` are joined
//! when the combined demand fits the vehicle and the endpoints line up
//! according to the [`MergePolicy`]. Surviving chains are wrapped with the
//! depot at both ends.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of clients (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::savings::Saving;
use crate::models::{Capacity, PointSet, Route};

/// Which chain endpoints a saving `(i, j)` may link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Only `i` at the tail of its chain joined to `j` at the head of its
    /// chain, producing `chain_i + chain_j`.
    #[default]
    TailToHead,
    /// All four tail/head combinations, reversing a chain where needed.
    AnyEndpoint,
}

impl MergePolicy {
    /// Kebab-case name used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TailToHead => "tail-to-head",
            Self::AnyEndpoint => "any-endpoint",
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tail-to-head" => Ok(Self::TailToHead),
            "any-endpoint" => Ok(Self::AnyEndpoint),
            other => Err(format!(
                "unknown merge policy '{other}' (expected tail-to-head or any-endpoint)"
            )),
        }
    }
}

/// Arena index of a chain in the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChainId(usize);

/// A depot-free run of clients under construction.
#[derive(Debug)]
struct Chain {
    members: Vec<usize>,
    load: u64,
}

impl Chain {
    fn head(&self) -> Option<usize> {
        self.members.first().copied()
    }

    fn tail(&self) -> Option<usize> {
        self.members.last().copied()
    }
}

/// How two chains are joined once a merge is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Join {
    /// `chain_i + chain_j`
    IThenJ,
    /// `chain_j + chain_i`
    JThenI,
    /// `chain_i + reverse(chain_j)`
    IThenReversedJ,
    /// `reverse(chain_i) + chain_j`
    ReversedIThenJ,
}

/// Working set of chains with an owned client-to-chain index.
///
/// Retired chains leave a `None` slot; merged chains are appended, so slot
/// order is also finalization order.
#[derive(Debug)]
struct ChainSet {
    chains: Vec<Option<Chain>>,
    chain_of: HashMap<usize, ChainId>,
}

impl ChainSet {
    fn singletons(points: &PointSet) -> Self {
        let mut chains = Vec::with_capacity(points.num_clients());
        let mut chain_of = HashMap::with_capacity(points.num_clients());
        for client in points.clients() {
            chain_of.insert(client.id(), ChainId(chains.len()));
            chains.push(Some(Chain {
                members: vec![client.id()],
                load: u64::from(client.demand()),
            }));
        }
        Self { chains, chain_of }
    }

    fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id.0).and_then(Option::as_ref)
    }

    fn locate(&self, client: usize) -> Option<ChainId> {
        self.chain_of.get(&client).copied()
    }

    /// Retires both chains and appends their concatenation as a new chain.
    fn merge(&mut self, ci: ChainId, cj: ChainId, join: Join) -> Option<ChainId> {
        let mut a = self.chains.get_mut(ci.0)?.take()?;
        let Some(mut b) = self.chains.get_mut(cj.0).and_then(Option::take) else {
            self.chains[ci.0] = Some(a);
            return None;
        };

        let (mut first, mut second) = match join {
            Join::IThenJ => (a.members, b.members),
            Join::JThenI => (b.members, a.members),
            Join::IThenReversedJ => {
                b.members.reverse();
                (a.members, b.members)
            }
            Join::ReversedIThenJ => {
                a.members.reverse();
                (a.members, b.members)
            }
        };
        first.append(&mut second);

        let merged_id = ChainId(self.chains.len());
        for &client in &first {
            self.chain_of.insert(client, merged_id);
        }
        self.chains.push(Some(Chain {
            members: first,
            load: a.load + b.load,
        }));
        Some(merged_id)
    }

    fn into_routes(self) -> Vec<Route> {
        self.chains
            .into_iter()
            .flatten()
            .map(|c| Route::from_chain(c.members))
            .collect()
    }
}

/// Decides whether the endpoints of two chains allow linking `i` to `j`.
fn endpoint_join(policy: MergePolicy, ci: &Chain, cj: &Chain, i: usize, j: usize) -> Option<Join> {
    let i_at_end = ci.tail() == Some(i);
    let j_at_start = cj.head() == Some(j);

    if i_at_end && j_at_start {
        return Some(Join::IThenJ);
    }
    if policy == MergePolicy::TailToHead {
        return None;
    }

    let i_at_start = ci.head() == Some(i);
    let j_at_end = cj.tail() == Some(j);

    if j_at_end && i_at_start {
        Some(Join::JThenI)
    } else if i_at_end && j_at_end {
        Some(Join::IThenReversedJ)
    } else if i_at_start && j_at_start {
        Some(Join::ReversedIThenJ)
    } else {
        None
    }
}

/// Builds depot-wrapped routes from savings with a single greedy pass.
///
/// Savings are stably sorted by decreasing score, so equal scores keep their
/// enumeration order. A saving is applied only if both clients sit on
/// different chains, the combined demand fits `capacity`, and the endpoints
/// satisfy `policy`. A client whose own demand exceeds capacity ends up
/// alone on its route.
///
/// Routes come out in finalization order: untouched singletons in point-set
/// order, then merged chains in the order their last merge happened.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Capacity, Point, PointSet};
/// use u_savings::distance::DistanceOracle;
/// use u_savings::constructive::{build_routes, generate_savings, MergePolicy};
///
/// let points = PointSet::new(vec![
///     Point::depot("Depot", 0.0, 0.0),
///     Point::new(1, "A", 0.0, 1.0, 1, ""),
///     Point::new(2, "B", 0.0, 2.0, 1, ""),
/// ]).unwrap();
/// let oracle = DistanceOracle::new(&points);
/// let savings = generate_savings(&oracle).unwrap();
/// let cap = Capacity::new(5).unwrap();
///
/// let routes = build_routes(&points, &savings, cap, MergePolicy::TailToHead);
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].stops(), &[0, 1, 2, 0]);
/// ```
pub fn build_routes(
    points: &PointSet,
    savings: &[Saving],
    capacity: Capacity,
    policy: MergePolicy,
) -> Vec<Route> {
    let mut ordered: Vec<&Saving> = savings.iter().collect();
    ordered.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut set = ChainSet::singletons(points);

    for saving in ordered {
        let (Some(ri), Some(rj)) = (set.locate(saving.i), set.locate(saving.j)) else {
            trace!(i = saving.i, j = saving.j, "saving references unknown client");
            continue;
        };
        if ri == rj {
            continue;
        }
        let (Some(ci), Some(cj)) = (set.chain(ri), set.chain(rj)) else {
            continue;
        };

        let combined = ci.load + cj.load;
        if !capacity.admits(combined) {
            trace!(i = saving.i, j = saving.j, combined, "merge exceeds capacity");
            continue;
        }

        let Some(join) = endpoint_join(policy, ci, cj, saving.i, saving.j) else {
            trace!(i = saving.i, j = saving.j, "endpoints not adjacent");
            continue;
        };

        if set.merge(ri, rj, join).is_some() {
            debug!(
                i = saving.i,
                j = saving.j,
                score = saving.score,
                load = combined,
                ?join,
                "merged chains"
            );
        }
    }

    set.into_routes()
}
