use thiserror::Error;

use crate::node::NodeId;

/// Failures of a single search run.
///
/// An unreachable goal is *not* an error: it is reported as a
/// [`SearchResult`](crate::SearchResult) with no `reached_goal`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("origin node {0} is not in the graph")]
    OriginNotFound(NodeId),

    #[error("node {0} is not in the graph")]
    NodeNotFound(NodeId),

    #[error("node {0} has no coordinate; informed search needs one on every reachable node")]
    MissingCoordinate(NodeId),

    #[error("the goal set is empty")]
    EmptyGoalSet,
}

/// Rejected graph construction input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("edge ({from},{to}) has invalid weight {weight}; expected a finite value >= 0")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error("node {0} has a non-finite coordinate")]
    InvalidCoordinate(NodeId),
}
