use crate::error::SearchError;
use crate::frontier::{Query, trace};
use crate::graph::{Graph, NO_PARENT};
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::{Heuristic, Strategy};

/// Depth-first search.
///
/// LIFO stack; a node is finalized (and goal-tested) when popped for the
/// first time. Unvisited neighbours are pushed in descending id order so
/// the smallest id is explored first. Returns the first path found, with
/// cost 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dfs;

impl Strategy for Dfs {
    fn name(&self) -> &'static str {
        "DFS"
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
        // (node, parent it was pushed from)
        let mut stack: Vec<(usize, usize)> = vec![(q.origin, NO_PARENT)];
        let mut children: Vec<usize> = Vec::new();
        let mut explored = 0;

        while let Some((ci, parent)) = stack.pop() {
            if visited[ci] {
                continue;
            }
            visited[ci] = true;
            parents[ci] = parent;
            explored += 1;

            if q.is_goal(ci) {
                log::debug!("dfs: reached {} after {explored} nodes", graph.id(ci));
                return Ok(q.found(trace(&parents, ci), 0.0, explored));
            }

            children.clear();
            children.extend(
                graph
                    .adjacent(ci)
                    .iter()
                    .map(|a| a.to)
                    .filter(|&ni| !visited[ni]),
            );
            children.sort_by(|&a, &b| graph.id(b).cmp(graph.id(a)));
            stack.extend(children.iter().map(|&ni| (ni, ci)));
        }

        log::debug!("dfs: goal set unreachable from {origin}, explored {explored}");
        Ok(q.unreachable(explored))
    }
}
