//! Runs strategies over a [`Problem`] and aggregates their metrics.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::heuristic::HeuristicKind;
use crate::node::NodeId;
use crate::problem::Problem;
use crate::result::SearchResult;
use crate::traits::{GraphLoader, Renderer, Strategy};

/// How the destinations of a problem are searched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GoalMode {
    /// One independent search per destination.
    #[default]
    Each,
    /// A single search stopping at whichever destination comes first.
    Any,
}

impl fmt::Display for GoalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GoalMode::Each => "each",
            GoalMode::Any => "any",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown goal mode {0:?} (expected each or any)")]
pub struct UnknownGoalMode(pub String);

impl FromStr for GoalMode {
    type Err = UnknownGoalMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "each" => Ok(GoalMode::Each),
            "any" => Ok(GoalMode::Any),
            _ => Err(UnknownGoalMode(s.to_string())),
        }
    }
}

/// Figures derived from one [`SearchResult`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// `nodes_explored / node_count * 100`.
    pub exploration_ratio: f64,
    pub success: bool,
}

impl Metrics {
    pub fn compute(result: &SearchResult, node_count: usize) -> Self {
        let exploration_ratio = if node_count == 0 {
            0.0
        } else {
            result.nodes_explored as f64 / node_count as f64 * 100.0
        };
        Self {
            exploration_ratio,
            success: result.is_success(),
        }
    }
}

/// Everything known about one (strategy, goal set) run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub heuristic: HeuristicKind,
    pub origin: NodeId,
    pub goals: Vec<NodeId>,
    pub result: SearchResult,
    pub metrics: Metrics,
}

/// Aggregate over a batch of reports.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub runs: usize,
    pub successes: usize,
    /// Percentage of successful runs.
    pub success_rate: f64,
    pub total_explored: usize,
    pub mean_explored: f64,
    pub mean_exploration_ratio: f64,
}

impl Summary {
    pub fn of(reports: &[SearchReport]) -> Self {
        let runs = reports.len();
        if runs == 0 {
            return Self::default();
        }
        let successes = reports.iter().filter(|r| r.metrics.success).count();
        let total_explored: usize = reports.iter().map(|r| r.result.nodes_explored).sum();
        let ratio_sum: f64 = reports.iter().map(|r| r.metrics.exploration_ratio).sum();
        let n = runs as f64;
        Self {
            runs,
            successes,
            success_rate: successes as f64 / n * 100.0,
            total_explored,
            mean_explored: total_explored as f64 / n,
            mean_exploration_ratio: ratio_sum / n,
        }
    }
}

/// Failure of [`Orchestrator::run`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("loading failed: {0}")]
    Load(Box<dyn Error>),

    #[error("rendering failed: {0}")]
    Render(Box<dyn Error>),
}

/// Selects strategies, runs them against the problem's destinations, and
/// hands every report to a [`Renderer`].
///
/// Searches are independent: each gets its own frontier and visited state
/// and only the read-only graph is shared.
#[derive(Clone, Debug)]
pub struct Orchestrator {
    algorithms: Vec<Algorithm>,
    heuristic: HeuristicKind,
    goal_mode: GoalMode,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new([Algorithm::default()])
    }
}

impl Orchestrator {
    pub fn new(algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        Self {
            algorithms: algorithms.into_iter().collect(),
            heuristic: HeuristicKind::default(),
            goal_mode: GoalMode::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_goal_mode(mut self, goal_mode: GoalMode) -> Self {
        self.goal_mode = goal_mode;
        self
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic
    }

    pub fn goal_mode(&self) -> GoalMode {
        self.goal_mode
    }

    fn goal_sets(&self, problem: &Problem) -> Vec<Vec<NodeId>> {
        match self.goal_mode {
            GoalMode::Each => problem.destinations.iter().map(|d| vec![d.clone()]).collect(),
            GoalMode::Any => vec![problem.destinations.clone()],
        }
    }

    /// Run every configured strategy against every goal set.
    ///
    /// The problem is validated first, so a missing origin fails before any
    /// strategy runs. Unreachable goals are reported, not raised.
    pub fn search(&self, problem: &Problem) -> Result<Vec<SearchReport>, SearchError> {
        problem.validate()?;
        let node_count = problem.graph.node_count();
        let goal_sets = self.goal_sets(problem);
        let mut reports = Vec::with_capacity(self.algorithms.len() * goal_sets.len());

        for &algorithm in &self.algorithms {
            for goals in &goal_sets {
                let result =
                    algorithm.run(&problem.graph, &self.heuristic, &problem.origin, goals)?;
                let metrics = Metrics::compute(&result, node_count);
                log::info!(
                    "{} {} -> {}: explored {} ({:.1}%), cost {}",
                    algorithm.name(),
                    problem.origin,
                    join(goals),
                    result.nodes_explored,
                    metrics.exploration_ratio,
                    result.total_cost,
                );
                if !metrics.success {
                    log::warn!(
                        "{}: no path from {} to {}",
                        algorithm.name(),
                        problem.origin,
                        join(goals)
                    );
                }
                reports.push(SearchReport {
                    algorithm,
                    heuristic: self.heuristic,
                    origin: problem.origin.clone(),
                    goals: goals.clone(),
                    result,
                    metrics,
                });
            }
        }
        Ok(reports)
    }

    /// Search, render each report, then let the renderer present the
    /// summary.
    pub fn run(&self, problem: &Problem, renderer: &mut dyn Renderer) -> Result<Summary, RunError> {
        let reports = self.search(problem)?;
        for report in &reports {
            renderer
                .render(&problem.graph, report)
                .map_err(RunError::Render)?;
        }
        let summary = Summary::of(&reports);
        renderer
            .finish(&problem.graph, &reports, &summary)
            .map_err(RunError::Render)?;
        Ok(summary)
    }

    /// Load a problem and [`run`](Orchestrator::run) it.
    pub fn run_from<L: GraphLoader>(
        &self,
        loader: &L,
        renderer: &mut dyn Renderer,
    ) -> Result<Summary, RunError> {
        let problem = loader.load().map_err(|e| RunError::Load(Box::new(e)))?;
        self.run(&problem, renderer)
    }
}

fn join(ids: &[NodeId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::graph::Graph;

    #[derive(Default)]
    struct Recorder {
        rendered: Vec<(Algorithm, Vec<NodeId>)>,
        finished: Option<Summary>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, _graph: &Graph, report: &SearchReport) -> Result<(), Box<dyn Error>> {
            self.rendered.push((report.algorithm, report.goals.clone()));
            Ok(())
        }

        fn finish(
            &mut self,
            _graph: &Graph,
            reports: &[SearchReport],
            summary: &Summary,
        ) -> Result<(), Box<dyn Error>> {
            assert_eq!(reports.len(), self.rendered.len());
            self.finished = Some(summary.clone());
            Ok(())
        }
    }

    struct Failing;

    impl Renderer for Failing {
        fn render(&mut self, _graph: &Graph, _report: &SearchReport) -> Result<(), Box<dyn Error>> {
            Err("disk full".into())
        }
    }

    fn problem() -> Problem {
        Problem::new(fixtures::line(), NodeId::Num(1), fixtures::ids(&[3, 4]))
    }

    #[test]
    fn metrics_ratio() {
        let r = SearchResult {
            path: fixtures::ids(&[1, 2]),
            total_cost: 1.0,
            nodes_explored: 2,
            reached_goal: Some(NodeId::Num(2)),
        };
        let m = Metrics::compute(&r, 8);
        assert_eq!(m.exploration_ratio, 25.0);
        assert!(m.success);
        assert_eq!(Metrics::compute(&r, 0).exploration_ratio, 0.0);
    }

    #[test]
    fn each_mode_runs_one_search_per_destination() {
        let o = Orchestrator::new([Algorithm::Bfs, Algorithm::AStar]);
        let reports = o.search(&problem()).unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].goals, fixtures::ids(&[3]));
        assert!(reports[0].metrics.success);
        assert_eq!(reports[1].goals, fixtures::ids(&[4]));
        assert!(!reports[1].metrics.success);
        assert_eq!(reports[3].algorithm, Algorithm::AStar);
    }

    #[test]
    fn any_mode_stops_at_first_goal() {
        let p = Problem::new(fixtures::line(), NodeId::Num(1), fixtures::ids(&[3, 2]));
        let o = Orchestrator::new([Algorithm::Ucs]).with_goal_mode(GoalMode::Any);
        let reports = o.search(&p).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].result.reached_goal, Some(NodeId::Num(2)));
    }

    #[test]
    fn summary_aggregates() {
        let o = Orchestrator::new([Algorithm::Bfs]);
        let mut rec = Recorder::default();
        let s = o.run(&problem(), &mut rec).unwrap();
        assert_eq!(rec.rendered.len(), 2);
        assert_eq!(rec.finished.as_ref(), Some(&s));
        assert_eq!(s.runs, 2);
        assert_eq!(s.successes, 1);
        assert_eq!(s.success_rate, 50.0);
        assert_eq!(s.total_explored, 6);
        assert_eq!(s.mean_explored, 3.0);
        assert_eq!(s.mean_exploration_ratio, 75.0);
        assert_eq!(Summary::of(&[]), Summary::default());
    }

    #[test]
    fn missing_origin_fails_before_running() {
        let p = Problem::new(fixtures::line(), NodeId::Num(42), fixtures::ids(&[3]));
        let mut rec = Recorder::default();
        let err = Orchestrator::default().run(&p, &mut rec).unwrap_err();
        assert!(matches!(err, RunError::Search(SearchError::OriginNotFound(_))));
        assert!(rec.rendered.is_empty());
    }

    #[test]
    fn renderer_failure_is_reported() {
        let err = Orchestrator::default().run(&problem(), &mut Failing).unwrap_err();
        assert!(matches!(err, RunError::Render(_)));
        assert_eq!(err.to_string(), "rendering failed: disk full");
    }

    #[test]
    fn goal_mode_parse() {
        assert_eq!("ANY".parse::<GoalMode>(), Ok(GoalMode::Any));
        assert!("all".parse::<GoalMode>().is_err());
        assert_eq!(GoalMode::Each.to_string(), "each");
    }
}
