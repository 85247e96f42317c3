use std::collections::VecDeque;

use crate::error::SearchError;
use crate::frontier::{Query, trace};
use crate::graph::{Graph, NO_PARENT};
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::{Heuristic, Strategy};

/// Breadth-first search.
///
/// FIFO frontier, nodes are marked visited when enqueued and goal-tested
/// when dequeued. Finds a path with the fewest edges; reports cost 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bfs;

impl Strategy for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn run(
        &self,
        graph: &Graph,
        _heuristic: &dyn Heuristic,
        origin: &NodeId,
        goals: &[NodeId],
    ) -> Result<SearchResult, SearchError> {
        let q = Query::new(graph, origin, goals)?;
        let n = q.node_count();
        let mut visited = vec![false; n];
        let mut parents = vec![NO_PARENT; n];
        let mut queue: VecDeque<usize> = VecDeque::new();

        visited[q.origin] = true;
        queue.push_back(q.origin);
        let mut explored = 0;

        while let Some(ci) = queue.pop_front() {
            explored += 1;
            if q.is_goal(ci) {
                log::debug!("bfs: reached {} after {explored} nodes", graph.id(ci));
                return Ok(q.found(trace(&parents, ci), 0.0, explored));
            }
            for a in graph.adjacent(ci) {
                if visited[a.to] {
                    continue;
                }
                visited[a.to] = true;
                parents[a.to] = ci;
                queue.push_back(a.to);
            }
        }

        log::debug!("bfs: goal set unreachable from {origin}, explored {explored}");
        Ok(q.unreachable(explored))
    }
}
