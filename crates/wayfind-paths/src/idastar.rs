use crate::error::SearchError;
use crate::frontier::Query;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::{Heuristic, Strategy};

/// Iterative-deepening A*.
///
/// Repeats a depth-first probe bounded by an `f = g + h` threshold, raising
/// the threshold each iteration to the smallest `f` that exceeded it. The
/// probe runs on an explicit stack, so path length is not limited by the
/// call stack. Memory is linear in the path length.
///
/// `nodes_explored` counts every node that passes the threshold test, in
/// every iteration, so it can exceed the node count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdaStar;

struct Frame {
    idx: usize,
    g: f64,
    next: usize,
}

enum Probe {
    Found { path: Vec<usize>, cost: f64 },
    /// Smallest `f` seen above the threshold; infinite when nothing was
    /// pruned.
    Exceeded(f64),
}

impl Strategy for IdaStar {
    fn name(&self) -> &'static str {
        "IDA*"
    }

    fn run(
        &self,
        graph: &Graph,
        heuristic: &dyn Heuristic,
        origin: &NodeId,
        goals: &[NodeId],
    ) -> Result<SearchResult, SearchError> {
        let q = Query::new(graph, origin, goals)?;
        let mut threshold = q.estimate(heuristic, q.origin)?;
        let mut explored = 0;

        loop {
            match probe(&q, heuristic, threshold, &mut explored)? {
                Probe::Found { path, cost } => {
                    log::debug!("idastar: reached goal at cost {cost} after {explored} touches");
                    return Ok(q.found(path, cost, explored));
                }
                Probe::Exceeded(next) if next.is_finite() => {
                    log::debug!("idastar: threshold {threshold} -> {next}");
                    threshold = next;
                }
                Probe::Exceeded(_) => {
                    log::debug!("idastar: goal set unreachable from {origin}, explored {explored}");
                    return Ok(q.unreachable(explored));
                }
            }
        }
    }
}

/// One bounded depth-first pass from the origin.
fn probe(
    q: &Query<'_>,
    heuristic: &dyn Heuristic,
    threshold: f64,
    explored: &mut usize,
) -> Result<Probe, SearchError> {
    let graph = q.graph;
    // The origin counts as a touch on every pass.
    *explored += 1;
    if q.is_goal(q.origin) {
        return Ok(Probe::Found {
            path: vec![q.origin],
            cost: 0.0,
        });
    }

    let mut on_path = vec![false; q.node_count()];
    on_path[q.origin] = true;
    let mut stack = vec![Frame {
        idx: q.origin,
        g: 0.0,
        next: 0,
    }];
    let mut next_threshold = f64::INFINITY;

    while let Some(top) = stack.last_mut() {
        let adj = graph.adjacent(top.idx);
        if top.next >= adj.len() {
            on_path[top.idx] = false;
            stack.pop();
            continue;
        }
        let a = adj[top.next];
        top.next += 1;
        if on_path[a.to] {
            continue;
        }

        let g = top.g + a.weight;
        let f = g + q.estimate(heuristic, a.to)?;
        if f > threshold {
            next_threshold = next_threshold.min(f);
            continue;
        }

        *explored += 1;
        if q.is_goal(a.to) {
            let mut path: Vec<usize> = stack.iter().map(|fr| fr.idx).collect();
            path.push(a.to);
            return Ok(Probe::Found { path, cost: g });
        }
        on_path[a.to] = true;
        stack.push(Frame {
            idx: a.to,
            g,
            next: 0,
        });
    }

    Ok(Probe::Exceeded(next_threshold))
}
