//! Search strategies over small weighted 2-D graphs.
//!
//! Every strategy consumes the same [`Graph`] and [`Heuristic`] and produces
//! the same [`SearchResult`]:
//!
//! | Strategy | Frontier order | Optimal |
//! |---|---|---|
//! | [`Bfs`] | FIFO | fewest edges only |
//! | [`Dfs`] | LIFO, smallest id first | no |
//! | [`Ucs`] | cumulative cost `g` | yes |
//! | [`Gbfs`] | heuristic `h` | no |
//! | [`AStar`] | `f = g + h` | with an admissible heuristic |
//! | [`IdaStar`] | depth-first under a rising `f` threshold | with an admissible heuristic |
//! | [`Beam`] | `k` lowest-`h` candidates per layer | no, and incomplete |
//!
//! [`Orchestrator`] runs a selection of [`Algorithm`]s against a
//! [`Problem`] and hands each [`SearchReport`] to a [`Renderer`]. Problems
//! come from a [`GraphLoader`] or from [`GraphGen`].
//!
//! # Trait seams
//!
//! | Trait | Implemented by |
//! |---|---|
//! | [`Heuristic`] | [`Euclidean`], [`Manhattan`], [`Chebyshev`], [`Zero`], [`HeuristicKind`] |
//! | [`Strategy`] | the seven strategies and [`Algorithm`] |
//! | [`GraphLoader`] | text loaders in downstream crates |
//! | [`Renderer`] | table, plot and JSON renderers in downstream crates |

mod algorithm;
mod astar;
mod beam;
mod bfs;
mod dfs;
mod distance;
mod error;
mod frontier;
mod gbfs;
mod graph;
mod graphgen;
mod heuristic;
mod idastar;
mod node;
mod orchestrator;
mod problem;
mod result;
mod traits;
mod ucs;

#[cfg(test)]
mod fixtures;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::AStar;
pub use beam::{Beam, DEFAULT_BEAM_WIDTH};
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::{GraphError, SearchError};
pub use gbfs::Gbfs;
pub use graph::{Edge, Graph, GraphBuilder};
pub use graphgen::GraphGen;
pub use heuristic::{Chebyshev, Euclidean, HeuristicKind, Manhattan, UnknownHeuristic, Zero};
pub use idastar::IdaStar;
pub use node::NodeId;
pub use orchestrator::{
    GoalMode, Metrics, Orchestrator, RunError, SearchReport, Summary, UnknownGoalMode,
};
pub use problem::Problem;
pub use result::SearchResult;
pub use traits::{GraphLoader, Heuristic, Renderer, Strategy};
pub use ucs::Ucs;
