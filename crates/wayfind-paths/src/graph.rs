//! The graph model: nodes with optional coordinates and weighted adjacency
//! lists. A [`Graph`] is immutable once built; use [`GraphBuilder`].

use std::collections::HashMap;

use wayfind_core::{Bounds, Coord};

use crate::error::{GraphError, SearchError};
use crate::node::NodeId;

/// Parent sentinel for "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// One entry of an adjacency list: index of the neighbour and edge weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Adjacent {
    pub(crate) to: usize,
    pub(crate) weight: f64,
}

#[derive(Clone, Debug)]
struct NodeEntry {
    id: NodeId,
    coord: Option<Coord>,
    adj: Vec<Adjacent>,
}

/// An edge as it was added to the graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<'g> {
    pub from: &'g NodeId,
    pub to: &'g NodeId,
    pub weight: f64,
}

/// Adjacency structure with optional 2-D coordinates and edge weights.
///
/// Neighbour lists keep the order in which edges were added; strategies
/// rely on that order for tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<NodeEntry>,
    lookup: HashMap<NodeId, usize>,
    edges: Vec<(usize, usize, f64)>,
    directed: bool,
}

impl Graph {
    /// Start building an undirected graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Number of nodes, including nodes that only appear in edges.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges as added (an undirected edge counts once).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.lookup.contains_key(id)
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes.iter().map(|n| &n.id)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.edges.iter().map(move |&(u, v, w)| Edge {
            from: &self.nodes[u].id,
            to: &self.nodes[v].id,
            weight: w,
        })
    }

    /// Neighbours of `id` with edge weights, in insertion order.
    pub fn neighbors(
        &self,
        id: &NodeId,
    ) -> Result<impl Iterator<Item = (&NodeId, f64)> + '_, SearchError> {
        let i = self.index_of(id)?;
        Ok(self.nodes[i]
            .adj
            .iter()
            .map(move |a| (&self.nodes[a.to].id, a.weight)))
    }

    /// Coordinate of `id`.
    ///
    /// Fails with [`SearchError::NodeNotFound`] if the node is absent and
    /// with [`SearchError::MissingCoordinate`] if it has no coordinate.
    pub fn coordinate(&self, id: &NodeId) -> Result<Coord, SearchError> {
        let i = self.index_of(id)?;
        self.coord_at(i)
    }

    /// Weight of the cheapest edge from `from` to `to`, if any.
    pub fn weight(&self, from: &NodeId, to: &NodeId) -> Option<f64> {
        let u = *self.lookup.get(from)?;
        let v = *self.lookup.get(to)?;
        self.cheapest(u, v)
    }

    /// Total weight of `path` using the cheapest edge for every hop.
    ///
    /// Returns `None` if some consecutive pair is not connected. A single
    /// node path costs 0; an empty path has no cost.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<f64> {
        let first = path.first()?;
        if !self.contains(first) {
            return None;
        }
        path.windows(2)
            .map(|w| self.weight(&w[0], &w[1]))
            .sum::<Option<f64>>()
    }

    /// Bounding box of every known coordinate.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.nodes.iter().filter_map(|n| n.coord))
    }

    // -----------------------------------------------------------------------
    // Index-level access for the strategies
    // -----------------------------------------------------------------------

    pub(crate) fn index_of(&self, id: &NodeId) -> Result<usize, SearchError> {
        self.lookup
            .get(id)
            .copied()
            .ok_or_else(|| SearchError::NodeNotFound(id.clone()))
    }

    #[inline]
    pub(crate) fn id(&self, i: usize) -> &NodeId {
        &self.nodes[i].id
    }

    #[inline]
    pub(crate) fn adjacent(&self, i: usize) -> &[Adjacent] {
        &self.nodes[i].adj
    }

    pub(crate) fn coord_at(&self, i: usize) -> Result<Coord, SearchError> {
        let n = &self.nodes[i];
        n.coord
            .ok_or_else(|| SearchError::MissingCoordinate(n.id.clone()))
    }

    fn cheapest(&self, u: usize, v: usize) -> Option<f64> {
        self.nodes[u]
            .adj
            .iter()
            .filter(|a| a.to == v)
            .map(|a| a.weight)
            .min_by(f64::total_cmp)
    }
}

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Deterministic construction of a [`Graph`] from node and edge records.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether edges are one-way. Defaults to `false` (edges are added
    /// in both directions).
    pub fn directed(mut self, directed: bool) -> Self {
        self.graph.directed = directed;
        self
    }

    /// Declare a node. Re-declaring an existing node replaces its
    /// coordinate when `coord` is `Some`.
    pub fn node(
        &mut self,
        id: impl Into<NodeId>,
        coord: Option<Coord>,
    ) -> Result<&mut Self, GraphError> {
        let id = id.into();
        if let Some(c) = coord {
            if !c.is_finite() {
                return Err(GraphError::InvalidCoordinate(id));
            }
        }
        let i = self.intern(id);
        if coord.is_some() {
            self.graph.nodes[i].coord = coord;
        }
        Ok(self)
    }

    /// Add an edge. A missing weight means 1. Unknown endpoints are created
    /// without coordinates. Parallel edges are kept.
    pub fn edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: Option<f64>,
    ) -> Result<&mut Self, GraphError> {
        let (from, to) = (from.into(), to.into());
        let weight = weight.unwrap_or(1.0);
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        let u = self.intern(from);
        let v = self.intern(to);
        self.graph.nodes[u].adj.push(Adjacent { to: v, weight });
        if !self.graph.directed && u != v {
            self.graph.nodes[v].adj.push(Adjacent { to: u, weight });
        }
        self.graph.edges.push((u, v, weight));
        Ok(self)
    }

    pub fn build(self) -> Graph {
        self.graph
    }

    fn intern(&mut self, id: NodeId) -> usize {
        if let Some(&i) = self.graph.lookup.get(&id) {
            return i;
        }
        let i = self.graph.nodes.len();
        self.graph.lookup.insert(id.clone(), i);
        self.graph.nodes.push(NodeEntry {
            id,
            coord: None,
            adj: Vec::new(),
        });
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut b = Graph::builder();
        b.node(1, Some(Coord::new(0.0, 0.0)))
            .unwrap()
            .node(2, Some(Coord::new(1.0, 0.0)))
            .unwrap()
            .node(3, None)
            .unwrap()
            .edge(1, 2, Some(4.0))
            .unwrap()
            .edge(1, 2, Some(2.5))
            .unwrap()
            .edge(2, 3, None)
            .unwrap();
        b.build()
    }

    #[test]
    fn counts_and_lookup() {
        let g = sample();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert!(g.contains(&NodeId::Num(3)));
        assert!(!g.contains(&NodeId::Num(4)));
        assert!(!g.is_directed());
    }

    #[test]
    fn neighbors_keep_insertion_order_and_duplicates() {
        let g = sample();
        let n: Vec<(NodeId, f64)> = g
            .neighbors(&NodeId::Num(2))
            .unwrap()
            .map(|(id, w)| (id.clone(), w))
            .collect();
        assert_eq!(
            n,
            vec![
                (NodeId::Num(1), 4.0),
                (NodeId::Num(1), 2.5),
                (NodeId::Num(3), 1.0)
            ]
        );
        assert!(matches!(
            g.neighbors(&NodeId::Num(9)),
            Err(SearchError::NodeNotFound(_))
        ));
    }

    #[test]
    fn coordinate_errors() {
        let g = sample();
        assert_eq!(g.coordinate(&NodeId::Num(2)), Ok(Coord::new(1.0, 0.0)));
        assert_eq!(
            g.coordinate(&NodeId::Num(3)),
            Err(SearchError::MissingCoordinate(NodeId::Num(3)))
        );
        assert_eq!(
            g.coordinate(&NodeId::Num(7)),
            Err(SearchError::NodeNotFound(NodeId::Num(7)))
        );
    }

    #[test]
    fn weight_picks_cheapest_parallel_edge() {
        let g = sample();
        assert_eq!(g.weight(&NodeId::Num(1), &NodeId::Num(2)), Some(2.5));
        assert_eq!(g.weight(&NodeId::Num(1), &NodeId::Num(3)), None);
        let path = [NodeId::Num(1), NodeId::Num(2), NodeId::Num(3)];
        assert_eq!(g.path_cost(&path), Some(3.5));
        assert_eq!(g.path_cost(&[NodeId::Num(1)]), Some(0.0));
        assert_eq!(g.path_cost(&[NodeId::Num(1), NodeId::Num(3)]), None);
        assert_eq!(g.path_cost(&[]), None);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut b = Graph::builder().directed(true);
        b.edge("a", "b", Some(1.0)).unwrap();
        let g = b.build();
        assert_eq!(g.weight(&"a".into(), &"b".into()), Some(1.0));
        assert_eq!(g.weight(&"b".into(), &"a".into()), None);
    }

    #[test]
    fn rejects_bad_weights_and_coordinates() {
        let mut b = Graph::builder();
        assert!(matches!(
            b.edge(1, 2, Some(-1.0)),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            b.edge(1, 2, Some(f64::NAN)),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert_eq!(
            b.node(1, Some(Coord::new(f64::INFINITY, 0.0))).err(),
            Some(GraphError::InvalidCoordinate(NodeId::Num(1)))
        );
        // Nothing was interned by the rejected records.
        assert_eq!(b.build().node_count(), 0);
    }

    #[test]
    fn redeclared_node_keeps_last_coordinate() {
        let mut b = Graph::builder();
        b.node(1, Some(Coord::new(1.0, 1.0)))
            .unwrap()
            .node(1, None)
            .unwrap()
            .node(1, Some(Coord::new(2.0, 3.0)))
            .unwrap();
        let g = b.build();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.coordinate(&NodeId::Num(1)), Ok(Coord::new(2.0, 3.0)));
        assert_eq!(g.bounds().map(|b| b.min), Some(Coord::new(2.0, 3.0)));
    }

    #[test]
    fn edges_reported_once() {
        let g = sample();
        let e: Vec<_> = g.edges().map(|e| (e.from.clone(), e.to.clone())).collect();
        assert_eq!(e.len(), 3);
        assert_eq!(e[2], (NodeId::Num(2), NodeId::Num(3)));
    }
}
