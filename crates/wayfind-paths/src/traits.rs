use wayfind_core::Coord;

use crate::error::SearchError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::orchestrator::{SearchReport, Summary};
use crate::problem::Problem;
use crate::result::SearchResult;

/// Estimate of the remaining cost between two nodes.
///
/// Implementors only supply a metric over coordinates; the provided
/// [`estimate`](Heuristic::estimate) looks the coordinates up.
pub trait Heuristic {
    /// Short display name.
    fn name(&self) -> &'static str;

    /// Distance between two coordinates. Must be non-negative.
    fn distance(&self, a: Coord, b: Coord) -> f64;

    /// Whether [`distance`](Heuristic::distance) reads its inputs at all.
    /// When `false`, nodes without coordinates are accepted.
    fn needs_coordinates(&self) -> bool {
        true
    }

    /// Estimate the cost from `node` to `goal`.
    ///
    /// Fails with [`SearchError::MissingCoordinate`] if either node lacks a
    /// coordinate and this heuristic needs them.
    fn estimate(&self, graph: &Graph, node: &NodeId, goal: &NodeId) -> Result<f64, SearchError> {
        if !self.needs_coordinates() {
            graph.index_of(node)?;
            graph.index_of(goal)?;
            return Ok(0.0);
        }
        Ok(self.distance(graph.coordinate(node)?, graph.coordinate(goal)?))
    }
}

/// A search algorithm: a pure function from graph, heuristic, origin, and
/// goal set to a [`SearchResult`].
///
/// Uninformed strategies ignore the heuristic.
pub trait Strategy {
    /// Short display name.
    fn name(&self) -> &'static str;

    /// Run the search. `goals` is treated as a set; the search stops at the
    /// first member it finalizes.
    fn run(
        &self,
        graph: &Graph,
        heuristic: &dyn Heuristic,
        origin: &NodeId,
        goals: &[NodeId],
    ) -> Result<SearchResult, SearchError>;
}

/// Produces a [`Problem`] from some external source.
pub trait GraphLoader {
    type Error: std::error::Error + 'static;

    fn load(&self) -> Result<Problem, Self::Error>;
}

/// Presents search reports to the user.
pub trait Renderer {
    /// Called once per finished search.
    fn render(
        &mut self,
        graph: &Graph,
        report: &SearchReport,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Called once after every search of a run has been rendered.
    fn finish(
        &mut self,
        _graph: &Graph,
        _reports: &[SearchReport],
        _summary: &Summary,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
