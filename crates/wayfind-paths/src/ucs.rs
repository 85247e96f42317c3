use crate::error::SearchError;
use crate::frontier::{OpenList, Query, trace};
use crate::graph::{Graph, NO_PARENT};
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::{Heuristic, Strategy};

/// Uniform-cost search (Dijkstra with early exit).
///
/// Min-priority frontier keyed by the cumulative cost `g`. Stale entries,
/// whose cost is above the best known for their node or whose node is
/// already closed, are skipped when popped. Optimal for non-negative
/// weights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ucs;

impl Strategy for Ucs {
    fn name(&self) -> &'static str {
        "UCS"
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
        let mut best = vec![f64::INFINITY; n];
        let mut closed = vec![false; n];
        let mut parents = vec![NO_PARENT; n];
        let mut open = OpenList::new();

        best[q.origin] = 0.0;
        open.push(0.0, q.origin, NO_PARENT, 0.0);
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
                    "ucs: reached {} at cost {} after {explored} nodes",
                    graph.id(ci),
                    cur.g
                );
                return Ok(q.found(trace(&parents, ci), cur.g, explored));
            }

            for a in graph.adjacent(ci) {
                if closed[a.to] {
                    continue;
                }
                let tentative = cur.g + a.weight;
                if tentative >= best[a.to] {
                    continue;
                }
                best[a.to] = tentative;
                open.push(tentative, a.to, ci, tentative);
            }
        }

        log::debug!("ucs: goal set unreachable from {origin}, explored {explored}");
        Ok(q.unreachable(explored))
    }
}
