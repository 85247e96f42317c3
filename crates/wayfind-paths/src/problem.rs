use crate::error::SearchError;
use crate::graph::Graph;
use crate::node::NodeId;

/// A graph plus the origin and destinations to search for.
#[derive(Clone, Debug)]
pub struct Problem {
    pub graph: Graph,
    pub origin: NodeId,
    /// Goal nodes in input order, without duplicates.
    pub destinations: Vec<NodeId>,
}

impl Problem {
    /// Build a problem. Duplicate destinations are dropped, first
    /// occurrence wins.
    pub fn new(
        graph: Graph,
        origin: NodeId,
        destinations: impl IntoIterator<Item = NodeId>,
    ) -> Self {
        let mut uniq: Vec<NodeId> = Vec::new();
        for d in destinations {
            if !uniq.contains(&d) {
                uniq.push(d);
            }
        }
        Self {
            graph,
            origin,
            destinations: uniq,
        }
    }

    /// Check that the origin and every destination are graph nodes and
    /// that there is at least one destination.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.graph.contains(&self.origin) {
            return Err(SearchError::OriginNotFound(self.origin.clone()));
        }
        if self.destinations.is_empty() {
            return Err(SearchError::EmptyGoalSet);
        }
        if let Some(d) = self.destinations.iter().find(|d| !self.graph.contains(d)) {
            return Err(SearchError::NodeNotFound(d.clone()));
        }
        Ok(())
    }
}
