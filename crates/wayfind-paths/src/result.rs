use crate::node::NodeId;

/// Outcome of one strategy run.
///
/// An empty `path` with `reached_goal == None` means no goal was reachable;
/// that is a normal outcome, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Nodes from the origin to `reached_goal`, both included.
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path`; 0 for BFS and DFS.
    pub total_cost: f64,
    /// Number of nodes popped or expanded, not merely enqueued.
    pub nodes_explored: usize,
    pub reached_goal: Option<NodeId>,
}

impl SearchResult {
    /// The "no goal reachable" result.
    pub fn unreachable(nodes_explored: usize) -> Self {
        Self {
            nodes_explored,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let r = SearchResult {
            path: vec![NodeId::Num(1), NodeId::Name("x".into())],
            total_cost: 2.5,
            nodes_explored: 3,
            reached_goal: Some(NodeId::Name("x".into())),
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
