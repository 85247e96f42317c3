//! Built-in heuristics.

use std::fmt;
use std::str::FromStr;

use wayfind_core::Coord;

use crate::distance;
use crate::traits::Heuristic;

/// Straight-line distance. Admissible whenever every edge weight is at
/// least the distance between its endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn name(&self) -> &'static str {
        "euclidean"
    }

    fn distance(&self, a: Coord, b: Coord) -> f64 {
        distance::euclidean(a, b)
    }
}

/// L1 distance. Overestimates on graphs with diagonal edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn name(&self) -> &'static str {
        "manhattan"
    }

    fn distance(&self, a: Coord, b: Coord) -> f64 {
        distance::manhattan(a, b)
    }
}

/// L∞ distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    fn name(&self) -> &'static str {
        "chebyshev"
    }

    fn distance(&self, a: Coord, b: Coord) -> f64 {
        distance::chebyshev(a, b)
    }
}

/// Always 0; needs no coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn distance(&self, _a: Coord, _b: Coord) -> f64 {
        0.0
    }

    fn needs_coordinates(&self) -> bool {
        false
    }
}

/// Runtime choice among the built-in heuristics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
    Zero,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 4] = [
        HeuristicKind::Euclidean,
        HeuristicKind::Manhattan,
        HeuristicKind::Chebyshev,
        HeuristicKind::Zero,
    ];

    fn inner(self) -> &'static dyn Heuristic {
        match self {
            HeuristicKind::Euclidean => &Euclidean,
            HeuristicKind::Manhattan => &Manhattan,
            HeuristicKind::Chebyshev => &Chebyshev,
            HeuristicKind::Zero => &Zero,
        }
    }
}

impl Heuristic for HeuristicKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn distance(&self, a: Coord, b: Coord) -> f64 {
        self.inner().distance(a, b)
    }

    fn needs_coordinates(&self) -> bool {
        self.inner().needs_coordinates()
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised heuristic name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic {0:?} (expected euclidean, manhattan, chebyshev, or zero)")]
pub struct UnknownHeuristic(pub String);

impl FromStr for HeuristicKind {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeuristicKind::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownHeuristic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::graph::Graph;
    use crate::node::NodeId;

    fn graph() -> Graph {
        let mut b = Graph::builder();
        b.node(1, Some(Coord::new(0.0, 0.0)))
            .unwrap()
            .node(2, Some(Coord::new(3.0, 4.0)))
            .unwrap()
            .node(3, None)
            .unwrap();
        b.build()
    }

    #[test]
    fn euclidean_estimate() {
        let g = graph();
        let h = Euclidean.estimate(&g, &NodeId::Num(1), &NodeId::Num(2));
        assert_eq!(h, Ok(5.0));
    }

    #[test]
    fn missing_coordinate_is_reported() {
        let g = graph();
        assert_eq!(
            Euclidean.estimate(&g, &NodeId::Num(3), &NodeId::Num(2)),
            Err(SearchError::MissingCoordinate(NodeId::Num(3)))
        );
        assert_eq!(
            Euclidean.estimate(&g, &NodeId::Num(1), &NodeId::Num(8)),
            Err(SearchError::NodeNotFound(NodeId::Num(8)))
        );
    }

    #[test]
    fn zero_needs_no_coordinates() {
        let g = graph();
        assert_eq!(Zero.estimate(&g, &NodeId::Num(3), &NodeId::Num(2)), Ok(0.0));
        assert!(Zero.estimate(&g, &NodeId::Num(9), &NodeId::Num(2)).is_err());
    }

    #[test]
    fn kind_dispatch_and_parse() {
        let g = graph();
        let m: HeuristicKind = "Manhattan".parse().unwrap();
        assert_eq!(m, HeuristicKind::Manhattan);
        assert_eq!(m.estimate(&g, &NodeId::Num(1), &NodeId::Num(2)), Ok(7.0));
        assert_eq!(
            HeuristicKind::Chebyshev.estimate(&g, &NodeId::Num(1), &NodeId::Num(2)),
            Ok(4.0)
        );
        assert!("octile".parse::<HeuristicKind>().is_err());
        assert_eq!(HeuristicKind::default().to_string(), "euclidean");
    }
}
