use crate::error::SearchError;
use crate::frontier::{OpenList, Query, trace};
use crate::graph::{Graph, NO_PARENT};
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::{Heuristic, Strategy};

/// Greedy best-first search.
///
/// Min-priority frontier keyed by the heuristic alone. A node is closed the
/// first time it is popped; later entries for it are skipped. Fast but
/// neither optimal nor, with a misleading heuristic, efficient. The
/// reported cost is the accumulated weight along the returned path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gbfs;

impl Strategy for Gbfs {
    fn name(&self) -> &'static str {
        "GBFS"
    }

    fn run(
        &self,
        graph: &Graph,
        heuristic: &dyn Heuristic,
        origin: &NodeId,
        goals: &[NodeId],
    ) -> Result<SearchResult, SearchError> {
        let q = Query::new(graph, origin, goals)?;
        let mut closed = vec![false; q.node_count()];
        let mut parents = vec![NO_PARENT; q.node_count()];
        let mut open = OpenList::new();

        open.push(q.estimate(heuristic, q.origin)?, q.origin, NO_PARENT, 0.0);
        let mut explored = 0;

        while let Some(cur) = open.pop() {
            let ci = cur.idx;
            if closed[ci] {
                continue;
            }
            closed[ci] = true;
            parents[ci] = cur.parent;
            explored += 1;

            if q.is_goal(ci) {
                log::debug!("gbfs: reached {} after {explored} nodes", graph.id(ci));
                return Ok(q.found(trace(&parents, ci), cur.g, explored));
            }

            for a in graph.adjacent(ci) {
                if closed[a.to] {
                    continue;
                }
                open.push(q.estimate(heuristic, a.to)?, a.to, ci, cur.g + a.weight);
            }
        }

        log::debug!("gbfs: goal set unreachable from {origin}, explored {explored}");
        Ok(q.unreachable(explored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::heuristic::{Euclidean, Zero};

    #[test]
    fn takes_the_bait() {
        let g = fixtures::greedy_trap();
        let r = Gbfs
            .run(&g, &Euclidean, &NodeId::Num(1), &fixtures::ids(&[4]))
            .unwrap();
        assert_eq!(r.path, fixtures::ids(&[1, 2, 4]));
        assert_eq!(r.total_cost, 20.0);
        assert_eq!(r.nodes_explored, 3);
    }

    #[test]
    fn cost_matches_path_weight() {
        let g = fixtures::detour();
        let r = Gbfs
            .run(&g, &Euclidean, &NodeId::Num(1), &fixtures::ids(&[4]))
            .unwrap();
        assert_eq!(g.path_cost(&r.path), Some(r.total_cost));
    }

    #[test]
    fn zero_heuristic_is_breadth_like() {
        // With all keys equal, entries pop in enqueue order.
        let g = fixtures::line();
        let r = Gbfs.run(&g, &Zero, &NodeId::Num(1), &fixtures::ids(&[3])).unwrap();
        assert_eq!(r.path, fixtures::ids(&[1, 2, 3]));
        assert_eq!(r.nodes_explored, 3);
    }

    #[test]
    fn unreachable_goal() {
        let g = fixtures::triangle_with_island();
        let r = Gbfs
            .run(&g, &Euclidean, &NodeId::Num(1), &fixtures::ids(&[4]))
            .unwrap();
        assert_eq!(r, SearchResult::unreachable(3));
    }
}
