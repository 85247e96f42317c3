//! Runtime selection among the built-in strategies.

use std::fmt;
use std::str::FromStr;

use crate::beam::{Beam, DEFAULT_BEAM_WIDTH};
use crate::error::SearchError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::result::SearchResult;
use crate::traits::{Heuristic, Strategy};
use crate::{AStar, Bfs, Dfs, Gbfs, IdaStar, Ucs};

/// One of the seven strategies, as chosen on the command line or in a
/// config file.
///
/// Parses from and prints as its key: `bfs`, `dfs`, `ucs`, `gbfs`,
/// `astar`, `idastar`, `beam` or `beam:K`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Gbfs,
    #[default]
    AStar,
    IdaStar,
    Beam { width: usize },
}

impl Algorithm {
    /// Every strategy, in presentation order.
    pub fn all(beam_width: usize) -> [Algorithm; 7] {
        [
            Algorithm::Bfs,
            Algorithm::Dfs,
            Algorithm::Ucs,
            Algorithm::Gbfs,
            Algorithm::AStar,
            Algorithm::IdaStar,
            Algorithm::beam(beam_width),
        ]
    }

    /// Beam search with `width` clamped to at least one.
    pub fn beam(width: usize) -> Self {
        Algorithm::Beam {
            width: width.max(1),
        }
    }

    /// Display name, e.g. `A*`.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Gbfs => "GBFS",
            Algorithm::AStar => "A*",
            Algorithm::IdaStar => "IDA*",
            Algorithm::Beam { .. } => "Beam",
        }
    }

    /// Command-line key without the beam width.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Gbfs => "gbfs",
            Algorithm::AStar => "astar",
            Algorithm::IdaStar => "idastar",
            Algorithm::Beam { .. } => "beam",
        }
    }

    /// Whether the strategy reads the heuristic.
    pub fn is_informed(&self) -> bool {
        matches!(
            self,
            Algorithm::Gbfs | Algorithm::AStar | Algorithm::IdaStar | Algorithm::Beam { .. }
        )
    }

    /// Whether the returned cost is minimal (given an admissible heuristic).
    pub fn is_optimal(&self) -> bool {
        matches!(self, Algorithm::Ucs | Algorithm::AStar | Algorithm::IdaStar)
    }

    /// Whether a reachable goal is always found.
    pub fn is_complete(&self) -> bool {
        !matches!(self, Algorithm::Beam { .. })
    }

    /// One-line note for reports.
    pub fn note(&self) -> String {
        match self {
            Algorithm::Bfs => "fewest edges".to_string(),
            Algorithm::Dfs => "first path found".to_string(),
            Algorithm::Ucs => "optimal".to_string(),
            Algorithm::Gbfs => "greedy, not optimal".to_string(),
            Algorithm::AStar => "optimal".to_string(),
            Algorithm::IdaStar => "optimal, bounded memory".to_string(),
            Algorithm::Beam { width } => format!("bounded by k={width}"),
        }
    }
}

impl Strategy for Algorithm {
    fn name(&self) -> &'static str {
        Algorithm::name(self)
    }

    fn run(
        &self,
        graph: &Graph,
        heuristic: &dyn Heuristic,
        origin: &NodeId,
        goals: &[NodeId],
    ) -> Result<SearchResult, SearchError> {
        match *self {
            Algorithm::Bfs => Bfs.run(graph, heuristic, origin, goals),
            Algorithm::Dfs => Dfs.run(graph, heuristic, origin, goals),
            Algorithm::Ucs => Ucs.run(graph, heuristic, origin, goals),
            Algorithm::Gbfs => Gbfs.run(graph, heuristic, origin, goals),
            Algorithm::AStar => AStar.run(graph, heuristic, origin, goals),
            Algorithm::IdaStar => IdaStar.run(graph, heuristic, origin, goals),
            Algorithm::Beam { width } => Beam::new(width).run(graph, heuristic, origin, goals),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Beam { width } => write!(f, "beam:{width}"),
            other => f.write_str(other.key()),
        }
    }
}

/// Error for an unrecognised algorithm key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected bfs, dfs, ucs, gbfs, astar, idastar, beam, or beam:K)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let alg = match key.as_str() {
            "bfs" => Algorithm::Bfs,
            "dfs" => Algorithm::Dfs,
            "ucs" => Algorithm::Ucs,
            "gbfs" => Algorithm::Gbfs,
            "astar" | "a*" => Algorithm::AStar,
            "idastar" | "ida*" => Algorithm::IdaStar,
            "beam" => Algorithm::beam(DEFAULT_BEAM_WIDTH),
            _ => {
                let width = key
                    .strip_prefix("beam:")
                    .and_then(|w| w.parse::<usize>().ok())
                    .ok_or_else(|| UnknownAlgorithm(s.to_string()))?;
                Algorithm::beam(width)
            }
        };
        Ok(alg)
    }
}

impl From<Algorithm> for String {
    fn from(a: Algorithm) -> Self {
        a.to_string()
    }
}

impl TryFrom<String> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_key() {
        let json = serde_json::to_string(&Algorithm::beam(3)).unwrap();
        assert_eq!(json, "\"beam:3\"");
        let back: Algorithm = serde_json::from_str("\"astar\"").unwrap();
        assert_eq!(back, Algorithm::AStar);
    }
}
