//! Random geometric problem generator.

use std::collections::HashSet;

use rand::{Rng, RngExt};
use wayfind_core::Coord;

use crate::distance;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::problem::Problem;

/// Generates random geometric graphs: nodes on distinct integer points of a
/// `width` x `height` area, each linked to its `degree` nearest neighbours.
///
/// Edge weights are the ceiling of the Euclidean distance between the
/// endpoints, so the Euclidean heuristic stays admissible. Node ids are
/// `1..=n` and the origin is always node 1.
pub struct GraphGen<R: Rng> {
    rng: R,
    width: i32,
    height: i32,
    degree: usize,
}

impl<R: Rng> GraphGen<R> {
    /// A generator over a 20 x 20 area with degree 3.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            width: 20,
            height: 20,
            degree: 3,
        }
    }

    pub fn with_area(mut self, width: i32, height: i32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// A graph with `nodes` nodes, or fewer if the area has fewer points.
    pub fn graph(&mut self, nodes: usize) -> Result<Graph, GraphError> {
        let capacity = (self.width as usize).saturating_mul(self.height as usize);
        let n = nodes.min(capacity);

        let mut seen = HashSet::with_capacity(n);
        let mut coords = Vec::with_capacity(n);
        while coords.len() < n {
            let x = self.rng.random_range(0..self.width);
            let y = self.rng.random_range(0..self.height);
            if seen.insert((x, y)) {
                coords.push(Coord::new(x as f64, y as f64));
            }
        }

        let mut b = Graph::builder();
        for (i, &c) in coords.iter().enumerate() {
            b.node(i + 1, Some(c))?;
        }

        let mut linked = HashSet::new();
        for (i, &from) in coords.iter().enumerate() {
            let mut near: Vec<(f64, usize)> = coords
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(j, &to)| (distance::euclidean(from, to), j))
                .collect();
            near.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            for &(d, j) in near.iter().take(self.degree) {
                if linked.insert((i.min(j), i.max(j))) {
                    b.edge(i + 1, j + 1, Some(d.ceil()))?;
                }
            }
        }

        let g = b.build();
        log::debug!(
            "graphgen: {} nodes, {} edges on {}x{}",
            g.node_count(),
            g.edge_count(),
            self.width,
            self.height
        );
        Ok(g)
    }

    /// A random graph with origin 1 and up to `destinations` distinct
    /// goals drawn from the other nodes.
    pub fn problem(&mut self, nodes: usize, destinations: usize) -> Result<Problem, GraphError> {
        let graph = self.graph(nodes.max(1))?;
        let mut pool: Vec<usize> = (2..=graph.node_count()).collect();
        if pool.is_empty() {
            pool.push(1);
        }
        let k = destinations.clamp(1, pool.len());
        // Partial Fisher-Yates: the first k slots end up a random sample.
        for i in 0..k {
            let j = self.rng.random_range(i..pool.len());
            pool.swap(i, j);
        }
        let goals = pool[..k].iter().map(|&i| NodeId::from(i));
        Ok(Problem::new(graph, NodeId::Num(1), goals))
    }
}
