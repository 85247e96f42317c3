//! Console tables for search reports.

use std::error::Error;
use std::io::Write;

use wayfind_paths::{Graph, NodeId, Renderer, SearchReport, Summary};

use crate::plot::Plotter;
use crate::term;

const RULE_WIDTH: usize = 50;
const LABEL_WIDTH: usize = 25;

/// Writes a performance table per report and, for batches of more than one
/// report, a comparison table with the summary.
///
/// With a [`Plotter`] attached, each table is followed by a plot of the
/// graph with the report's path.
pub struct TextRenderer<W: Write> {
    out: W,
    plotter: Option<Plotter>,
    color: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            plotter: None,
            color: false,
        }
    }

    pub fn with_plot(mut self, plotter: Option<Plotter>) -> Self {
        self.plotter = plotter;
        self
    }

    /// Colour the plots with terminal escape sequences.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn row(&mut self, label: &str, value: impl std::fmt::Display) -> std::io::Result<()> {
        writeln!(self.out, "{label:<LABEL_WIDTH$} {value}")
    }
}

/// `a -> b -> c`, or `-` for an empty path.
pub fn format_path(path: &[NodeId]) -> String {
    if path.is_empty() {
        return "-".to_string();
    }
    path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" -> ")
}

fn format_goals(goals: &[NodeId]) -> String {
    goals.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, graph: &Graph, report: &SearchReport) -> Result<(), Box<dyn Error>> {
        let r = &report.result;
        let rule = "=".repeat(RULE_WIDTH);
        let title = format!(
            "--- {} PERFORMANCE SHOWCASE ---",
            report.algorithm.name().to_uppercase()
        );

        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{title:^RULE_WIDTH$}")?;
        writeln!(self.out, "{rule}")?;
        self.row("Search:", format!("{} -> {}", report.origin, format_goals(&report.goals)))?;
        self.row(
            "1. Success Rate:",
            if report.metrics.success { "100.0%" } else { "0.0%" },
        )?;
        self.row("2. Nodes Explored:", format!("{} nodes", r.nodes_explored))?;
        self.row(
            "3. Exploration Ratio:",
            format!("{:.2}%", report.metrics.exploration_ratio),
        )?;
        self.row("4. Path Length:", format!("{} nodes", r.path.len()))?;
        self.row("5. Total Path Cost:", r.total_cost)?;
        self.row("6. Notes:", report.algorithm.note())?;
        match &r.reached_goal {
            Some(goal) => self.row("Goal Reached:", goal)?,
            None => self.row("Goal Reached:", "none (unreachable)")?,
        }
        self.row("Path:", format_path(&r.path))?;
        writeln!(self.out, "{rule}")?;

        if let Some(plotter) = self.plotter {
            let grid = plotter.plot(graph, Some(report));
            term::write_grid(&mut self.out, &grid, self.color)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn finish(
        &mut self,
        _graph: &Graph,
        reports: &[SearchReport],
        summary: &Summary,
    ) -> Result<(), Box<dyn Error>> {
        if reports.len() < 2 {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{:<8} {:<10} {:>5} {:>9} {:>8} {:>8}  {}",
            "Strategy", "Goal", "Found", "Explored", "Ratio", "Cost", "Note"
        )?;
        writeln!(self.out, "{}", "-".repeat(72))?;
        for rep in reports {
            writeln!(
                self.out,
                "{:<8} {:<10} {:>5} {:>9} {:>7.2}% {:>8}  {}",
                rep.algorithm.name(),
                format_goals(&rep.goals),
                if rep.metrics.success { "yes" } else { "no" },
                rep.result.nodes_explored,
                rep.metrics.exploration_ratio,
                rep.result.total_cost,
                rep.algorithm.note(),
            )?;
        }
        writeln!(self.out, "{}", "-".repeat(72))?;
        writeln!(
            self.out,
            "{} runs, {} succeeded ({:.1}%), {} nodes explored (mean {:.2}, mean ratio {:.2}%)",
            summary.runs,
            summary.successes,
            summary.success_rate,
            summary.total_explored,
            summary.mean_explored,
            summary.mean_exploration_ratio,
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::Coord;
    use wayfind_paths::{Algorithm, GoalMode, Orchestrator, Problem};

    fn problem() -> Problem {
        let mut b = Graph::builder();
        b.node(1, Some(Coord::new(0.0, 0.0)))
            .unwrap()
            .node(2, Some(Coord::new(1.0, 0.0)))
            .unwrap()
            .node(3, Some(Coord::new(2.0, 0.0)))
            .unwrap()
            .node(4, Some(Coord::new(5.0, 5.0)))
            .unwrap()
            .edge(1, 2, Some(1.0))
            .unwrap()
            .edge(2, 3, Some(1.0))
            .unwrap();
        Problem::new(b.build(), NodeId::Num(1), vec![NodeId::Num(3), NodeId::Num(4)])
    }

    fn render(orch: Orchestrator, plot: Option<Plotter>) -> String {
        let mut r = TextRenderer::new(Vec::new()).with_plot(plot);
        orch.run(&problem(), &mut r).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    fn row(label: &str, value: &str) -> String {
        format!("{label:<25} {value}\n")
    }

    #[test]
    fn showcase_table() {
        let out = render(Orchestrator::new([Algorithm::AStar]), None);
        assert!(out.contains(&format!("{:^50}\n", "--- A* PERFORMANCE SHOWCASE ---")));
        assert!(out.contains(&row("1. Success Rate:", "100.0%")));
        assert!(out.contains(&row("2. Nodes Explored:", "3 nodes")));
        assert!(out.contains(&row("3. Exploration Ratio:", "75.00%")));
        assert!(out.contains(&row("4. Path Length:", "3 nodes")));
        assert!(out.contains(&row("5. Total Path Cost:", "2")));
        assert!(out.contains(&row("6. Notes:", "optimal")));
        assert!(out.contains(&row("Path:", "1 -> 2 -> 3")));
        // Second destination is unreachable.
        assert!(out.contains(&row("Goal Reached:", "none (unreachable)")));
        assert!(out.contains(&row("Path:", "-")));
        // Two runs of one strategy still get the comparison table.
        assert!(out.contains("2 runs, 1 succeeded (50.0%)"));
    }

    #[test]
    fn single_run_has_no_comparison() {
        let orch = Orchestrator::new([Algorithm::Bfs]).with_goal_mode(GoalMode::Any);
        let out = render(orch, None);
        assert!(out.contains("--- BFS PERFORMANCE SHOWCASE ---"));
        assert!(!out.contains("runs,"));
    }

    #[test]
    fn comparison_lists_every_strategy() {
        let out = render(Orchestrator::new(Algorithm::all(2)).with_goal_mode(GoalMode::Any), None);
        for name in ["BFS", "DFS", "UCS", "GBFS", "A*", "IDA*", "Beam"] {
            assert!(out.contains(&format!("--- {} PERFORMANCE", name.to_uppercase())));
        }
        assert!(out.contains("bounded by k=2"));
        assert!(out.contains("7 runs, 7 succeeded (100.0%)"));
    }

    #[test]
    fn plot_follows_table() {
        let out = render(
            Orchestrator::new([Algorithm::Ucs]).with_goal_mode(GoalMode::Any),
            Some(Plotter::new(12, 4)),
        );
        assert!(out.contains('S'));
        assert!(out.contains('G'));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn path_formatting() {
        assert_eq!(format_path(&[]), "-");
        assert_eq!(format_path(&[NodeId::Num(1), "b".into()]), "1 -> b");
    }
}
