//! Small graphs shared by the unit tests.

use wayfind_core::Coord;

use crate::graph::Graph;
use crate::node::NodeId;

pub(crate) fn build(nodes: &[(i64, f64, f64)], edges: &[(i64, i64, f64)]) -> Graph {
    let mut b = Graph::builder();
    for &(id, x, y) in nodes {
        b.node(id, Some(Coord::new(x, y))).unwrap();
    }
    for &(u, v, w) in edges {
        b.edge(u, v, Some(w)).unwrap();
    }
    b.build()
}

pub(crate) fn ids(raw: &[i64]) -> Vec<NodeId> {
    raw.iter().map(|&n| NodeId::Num(n)).collect()
}

/// 1 - 2 - 3 on the x axis with unit edges, plus an isolated node 4.
pub(crate) fn line() -> Graph {
    build(
        &[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 2.0, 0.0), (4, 5.0, 5.0)],
        &[(1, 2, 1.0), (2, 3, 1.0)],
    )
}

/// Two cost-2 routes from 1 to 3: via 2 and via 5.
pub(crate) fn two_routes() -> Graph {
    build(
        &[(1, 0.0, 0.0), (2, 0.5, 0.5), (3, 1.0, 0.0), (5, 0.5, -0.5)],
        &[(1, 2, 1.0), (2, 3, 1.0), (1, 5, 1.0), (5, 3, 1.0)],
    )
}

/// The fewest-edges route 1-2-4 costs 7; the cheapest 1-3-2-4 costs 6.
pub(crate) fn detour() -> Graph {
    build(
        &[(1, 0.0, 0.0), (2, 2.0, 0.0), (3, 1.0, 1.0), (4, 4.0, 0.0)],
        &[(1, 2, 5.0), (1, 3, 2.0), (3, 2, 2.0), (2, 4, 2.0)],
    )
}

/// Greedy bait: node 2 sits next to goal 4 but the route through it costs
/// 20, while 1-3-4 costs 5.
pub(crate) fn greedy_trap() -> Graph {
    build(
        &[(1, 0.0, 0.0), (2, 2.0, 0.0), (3, 0.0, 1.0), (4, 3.0, 0.0)],
        &[(1, 2, 10.0), (2, 4, 10.0), (1, 3, 1.0), (3, 4, 4.0)],
    )
}

/// A triangle 1-2-3 with an unreachable goal 4.
pub(crate) fn triangle_with_island() -> Graph {
    build(
        &[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 0.0, 1.0), (4, 9.0, 9.0)],
        &[(1, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)],
    )
}
