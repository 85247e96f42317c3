//! Shared plumbing for the strategies: goal-set resolution, the ordered
//! frontier entry, and path reconstruction.

use std::collections::BinaryHeap;

use crate::error::SearchError;
use crate::graph::{Graph, NO_PARENT};
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::Heuristic;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A resolved (graph, origin, goals) triple, all in index space.
pub(crate) struct Query<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) origin: usize,
    goals: Vec<usize>,
    is_goal: Vec<bool>,
}

impl<'g> Query<'g> {
    pub(crate) fn new(
        graph: &'g Graph,
        origin: &NodeId,
        goals: &[NodeId],
    ) -> Result<Self, SearchError> {
        let origin = graph
            .index_of(origin)
            .map_err(|_| SearchError::OriginNotFound(origin.clone()))?;
        if goals.is_empty() {
            return Err(SearchError::EmptyGoalSet);
        }
        let mut is_goal = vec![false; graph.node_count()];
        let mut idxs = Vec::with_capacity(goals.len());
        for g in goals {
            let gi = graph.index_of(g)?;
            if !is_goal[gi] {
                is_goal[gi] = true;
                idxs.push(gi);
            }
        }
        Ok(Self {
            graph,
            origin,
            goals: idxs,
            is_goal,
        })
    }

    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub(crate) fn is_goal(&self, i: usize) -> bool {
        self.is_goal[i]
    }

    /// Heuristic value of node `i`: the smallest estimate to any goal.
    pub(crate) fn estimate(&self, h: &dyn Heuristic, i: usize) -> Result<f64, SearchError> {
        if !h.needs_coordinates() {
            return Ok(0.0);
        }
        let from = self.graph.coord_at(i)?;
        let mut best = f64::INFINITY;
        for &gi in &self.goals {
            best = best.min(h.distance(from, self.graph.coord_at(gi)?));
        }
        Ok(best)
    }

    /// Build a successful result from a path in index space.
    pub(crate) fn found(&self, path: Vec<usize>, cost: f64, explored: usize) -> SearchResult {
        let path: Vec<NodeId> = path.into_iter().map(|i| self.graph.id(i).clone()).collect();
        SearchResult {
            reached_goal: path.last().cloned(),
            path,
            total_cost: cost,
            nodes_explored: explored,
        }
    }

    /// Build the "goal set unreachable" result.
    pub(crate) fn unreachable(&self, explored: usize) -> SearchResult {
        SearchResult::unreachable(explored)
    }
}

/// Follow `parents` back from `goal` to the root and return the path in
/// origin-to-goal order.
pub(crate) fn trace(parents: &[usize], goal: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut ci = goal;
    while ci != NO_PARENT {
        path.push(ci);
        ci = parents[ci];
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Priority frontier
// ---------------------------------------------------------------------------

/// A priority-frontier entry.
///
/// `key` is the strategy's ordering value (`g` for UCS, `h` for GBFS,
/// `f = g + h` for A*); `seq` is the enqueue counter. The smallest key
/// pops first and equal keys pop in enqueue order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) key: f64,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
    pub(crate) parent: usize,
    pub(crate) g: f64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority open list with FIFO tie-breaking.
#[derive(Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl OpenList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: f64, idx: usize, parent: usize, g: f64) {
        self.heap.push(Entry {
            key,
            seq: self.seq,
            idx,
            parent,
            g,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }
}
