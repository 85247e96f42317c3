use crate::error::SearchError;
use crate::frontier::{OpenList, Query, trace};
use crate::graph::{Graph, NO_PARENT};
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::{Heuristic, Strategy};

/// A* search.
///
/// Min-priority frontier keyed by `f = g + h`, equal keys in enqueue
/// order, stale entries skipped exactly as in [`Ucs`](crate::Ucs).
/// Optimal when the heuristic never overestimates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AStar;

impl Strategy for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn run(
        &self,
        graph: &Graph,
        heuristic: &dyn Heuristic,
        origin: &NodeId,
        goals: &[NodeId],
    ) -> Result<SearchResult, SearchError> {
        let q = Query::new(graph, origin, goals)?;
        let n = q.node_count();
        let mut best = vec![f64::INFINITY; n];
        let mut closed = vec![false; n];
        let mut parents = vec![NO_PARENT; n];
        let mut open = OpenList::new();

        best[q.origin] = 0.0;
        open.push(q.estimate(heuristic, q.origin)?, q.origin, NO_PARENT, 0.0);
        let mut explored = 0;

        while let Some(cur) = open.pop() {
            let ci = cur.idx;
            // Skip stale entries.
            if closed[ci] || cur.g > best[ci] {
                continue;
            }
            closed[ci] = true;
            parents[ci] = cur.parent;
            explored += 1;

            if q.is_goal(ci) {
                log::debug!(
                    "astar: reached {} at cost {} after {explored} nodes",
                    graph.id(ci),
                    cur.g
                );
                return Ok(q.found(trace(&parents, ci), cur.g, explored));
            }

            for a in graph.adjacent(ci) {
                if closed[a.to] {
                    continue;
                }
                let tentative_g = cur.g + a.weight;
                if tentative_g >= best[a.to] {
                    continue;
                }
                best[a.to] = tentative_g;
                let f = tentative_g + q.estimate(heuristic, a.to)?;
                open.push(f, a.to, ci, tentative_g);
            }
        }

        log::debug!("astar: goal set unreachable from {origin}, explored {explored}");
        Ok(q.unreachable(explored))
    }
}
