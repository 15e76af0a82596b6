//! Candidate topologies and their objective values.

use super::candidates::{CandidateEdgeSet, EdgeId};
use crate::graph::Edge;

/// A subset of a [`CandidateEdgeSet`], stored as sorted, duplicate-free
/// edge ids.
///
/// A `Topology` is the genome the evolutionary loop manipulates. It is not
/// assumed to be strongly connected until [`repair`](super::repair) has run
/// on it.
///
/// With the `serde` feature a topology (de)serializes as a plain id list;
/// deserialized ids are sorted and deduplicated like [`Topology::from_edge_ids`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<EdgeId>", into = "Vec<EdgeId>")
)]
pub struct Topology {
    edge_ids: Vec<EdgeId>,
}

impl Topology {
    /// Creates a topology with no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a topology from candidate edge ids. Duplicates are dropped.
    ///
    /// Ids must index the candidate set the topology is later used with.
    pub fn from_edge_ids<I: IntoIterator<Item = EdgeId>>(ids: I) -> Self {
        let mut edge_ids: Vec<EdgeId> = ids.into_iter().collect();
        edge_ids.sort_unstable();
        edge_ids.dedup();
        Self { edge_ids }
    }

    /// Builds a topology from ids already known to be strictly increasing.
    pub(crate) fn from_sorted_ids(edge_ids: Vec<EdgeId>) -> Self {
        debug_assert!(edge_ids.windows(2).all(|w| w[0] < w[1]));
        Self { edge_ids }
    }

    /// Edge ids in ascending order.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edge_ids.len()
    }

    /// Returns `true` if the topology has no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_ids.is_empty()
    }

    /// Returns `true` if the candidate edge `id` is part of this topology.
    pub fn contains(&self, id: EdgeId) -> bool {
        self.edge_ids.binary_search(&id).is_ok()
    }

    /// Adds a candidate edge. Returns `false` if it was already present.
    pub fn insert(&mut self, id: EdgeId) -> bool {
        match self.edge_ids.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.edge_ids.insert(pos, id);
                true
            }
        }
    }

    /// Removes and returns the edge id at `position` in ascending order.
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    pub fn remove_at(&mut self, position: usize) -> EdgeId {
        self.edge_ids.remove(position)
    }

    /// Resolves the edge ids against `candidates`.
    ///
    /// # Panics
    /// Panics if an id does not index `candidates`.
    pub fn edges<'a>(
        &'a self,
        candidates: &'a CandidateEdgeSet,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edge_ids.iter().map(move |&id| candidates.edge(id))
    }
}

impl From<Vec<EdgeId>> for Topology {
    fn from(ids: Vec<EdgeId>) -> Self {
        Self::from_edge_ids(ids)
    }
}

impl From<Topology> for Vec<EdgeId> {
    fn from(topology: Topology) -> Self {
        topology.edge_ids
    }
}

/// The two minimized objectives of an evaluated topology.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objectives {
    /// Number of edges (infrastructure cost).
    pub edge_count: usize,
    /// Sum of shortest directed distances over all ordered node pairs,
    /// self-pairs included (network efficiency).
    pub travel_cost: f64,
}

impl Objectives {
    /// Pareto dominance under minimization: no worse in both objectives and
    /// strictly better in at least one.
    ///
    /// ```
    /// use u_netopt::topology::Objectives;
    ///
    /// let a = Objectives { edge_count: 3, travel_cost: 10.0 };
    /// let b = Objectives { edge_count: 4, travel_cost: 10.0 };
    /// assert!(a.dominates(&b));
    /// assert!(!b.dominates(&a));
    /// assert!(!a.dominates(&a));
    /// ```
    pub fn dominates(&self, other: &Self) -> bool {
        self.edge_count <= other.edge_count
            && self.travel_cost <= other.travel_cost
            && (self.edge_count < other.edge_count || self.travel_cost < other.travel_cost)
    }
}

/// An evaluated, strongly connected topology.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The edge subset.
    pub topology: Topology,
    /// Its objective values.
    pub objectives: Objectives,
}

impl Solution {
    /// Resolves this solution's edges against `candidates`.
    pub fn edges<'a>(
        &'a self,
        candidates: &'a CandidateEdgeSet,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        self.topology.edges(candidates)
    }
}
