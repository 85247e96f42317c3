use crate::error::SearchError;
use crate::frontier::Query;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::{Heuristic, Strategy};

/// Default number of candidates kept per layer.
pub const DEFAULT_BEAM_WIDTH: usize = 2;

/// Bounded-width beam search.
///
/// Each layer extends every surviving partial path by one edge, skipping
/// nodes already on that path, then keeps the `width` candidates with the
/// lowest heuristic value (stable on ties). Cycle avoidance is path-local, so
/// the same node may appear in several candidates of one layer. Goals are
/// tested when a candidate is generated.
///
/// This is incomplete by construction: when the beam discards every partial
/// path that leads to a goal, the search reports failure even though a path
/// exists. `nodes_explored` sums the beam size of every layer, so it can
/// exceed the node count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Beam {
    width: usize,
}

impl Beam {
    /// A beam of `width` candidates; zero is raised to one.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for Beam {
    fn default() -> Self {
        Self::new(DEFAULT_BEAM_WIDTH)
    }
}

struct Partial {
    path: Vec<usize>,
    g: f64,
    h: f64,
}

impl Strategy for Beam {
    fn name(&self) -> &'static str {
        "Beam"
    }

    fn run(
        &self,
        graph: &Graph,
        heuristic: &dyn Heuristic,
        origin: &NodeId,
        goals: &[NodeId],
    ) -> Result<SearchResult, SearchError> {
        let q = Query::new(graph, origin, goals)?;
        if q.is_goal(q.origin) {
            return Ok(q.found(vec![q.origin], 0.0, 1));
        }

        let mut beam = vec![Partial {
            path: vec![q.origin],
            g: 0.0,
            h: q.estimate(heuristic, q.origin)?,
        }];
        let mut explored = 0;
        let mut layer = 0;

        while !beam.is_empty() {
            layer += 1;
            explored += beam.len();
            let mut candidates = Vec::new();

            for p in &beam {
                let Some(&last) = p.path.last() else {
                    continue;
                };
                for a in graph.adjacent(last) {
                    if p.path.contains(&a.to) {
                        continue;
                    }
                    let mut path = p.path.clone();
                    path.push(a.to);
                    let g = p.g + a.weight;
                    if q.is_goal(a.to) {
                        log::debug!("beam: reached {} in layer {layer}", graph.id(a.to));
                        return Ok(q.found(path, g, explored));
                    }
                    candidates.push(Partial {
                        h: q.estimate(heuristic, a.to)?,
                        path,
                        g,
                    });
                }
            }

            candidates.sort_by(|a, b| a.h.total_cmp(&b.h));
            let generated = candidates.len();
            candidates.truncate(self.width);
            log::debug!(
                "beam: layer {layer} kept {} of {generated} candidates",
                candidates.len()
            );
            beam = candidates;
        }

        log::debug!("beam: goal set unreachable from {origin}, explored {explored}");
        Ok(q.unreachable(explored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::heuristic::Euclidean;

    #[test]
    fn width_is_at_least_one() {
        assert_eq!(Beam::new(0).width(), 1);
        assert_eq!(Beam::default().width(), DEFAULT_BEAM_WIDTH);
    }

    #[test]
    fn straight_line() {
        let g = fixtures::line();
        let r = Beam::default()
            .run(&g, &Euclidean, &NodeId::Num(1), &fixtures::ids(&[3]))
            .unwrap();
        assert_eq!(r.path, fixtures::ids(&[1, 2, 3]));
        assert_eq!(r.total_cost, 2.0);
        assert_eq!(r.nodes_explored, 2);
    }

    #[test]
    fn narrow_beam_loses_the_path() {
        // 1 fans out to 2 and 3; only 3 leads to goal 4, but 2 looks
        // closer.
        let g = fixtures::build(
            &[(1, 0.0, 0.0), (2, 4.0, 1.0), (3, 0.0, 3.0), (4, 5.0, 0.0)],
            &[(1, 2, 1.0), (1, 3, 1.0), (3, 4, 1.0)],
        );
        let goals = fixtures::ids(&[4]);
        let narrow = Beam::new(1)
            .run(&g, &Euclidean, &NodeId::Num(1), &goals)
            .unwrap();
        assert!(!narrow.is_success());
        let wide = Beam::new(2)
            .run(&g, &Euclidean, &NodeId::Num(1), &goals)
            .unwrap();
        assert_eq!(wide.path, fixtures::ids(&[1, 3, 4]));
    }

    #[test]
    fn explored_can_exceed_node_count() {
        let g = fixtures::triangle_with_island();
        let r = Beam::default()
            .run(&g, &Euclidean, &NodeId::Num(1), &fixtures::ids(&[4]))
            .unwrap();
        assert!(!r.is_success());
        // Layers of 1, 2 and 2 partial paths.
        assert_eq!(r.nodes_explored, 5);
        assert!(r.nodes_explored > g.node_count());
    }

    #[test]
    fn shared_node_survives_in_two_paths() {
        // 2 and 3 both lead to 4, which sits next to goal 6 but has no edge
        // to it. Both copies of 4 must be kept for 1-2-4-3-5-6 to appear.
        let g = fixtures::build(
            &[
                (1, 0.0, 0.0),
                (2, 4.0, 2.0),
                (3, 4.0, -2.0),
                (4, 8.0, 0.0),
                (5, 9.0, 5.0),
                (6, 10.0, 0.0),
            ],
            &[
                (1, 2, 1.0),
                (1, 3, 1.0),
                (2, 4, 1.0),
                (3, 4, 1.0),
                (3, 5, 1.0),
                (5, 6, 1.0),
            ],
        );
        let r = Beam::new(2)
            .run(&g, &Euclidean, &NodeId::Num(1), &fixtures::ids(&[6]))
            .unwrap();
        assert_eq!(r.path, fixtures::ids(&[1, 2, 4, 3, 5, 6]));
        assert_eq!(r.total_cost, 5.0);
        // Layers of 1, 2, 2, 2 and 1 partial paths.
        assert_eq!(r.nodes_explored, 8);
    }

    #[test]
    fn origin_is_goal() {
        let g = fixtures::line();
        let r = Beam::default()
            .run(&g, &Euclidean, &NodeId::Num(1), &fixtures::ids(&[1]))
            .unwrap();
        assert_eq!(r.path, fixtures::ids(&[1]));
        assert_eq!(r.nodes_explored, 1);
    }
}
