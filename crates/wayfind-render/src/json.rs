//! Line-delimited JSON output.

use std::error::Error;
use std::io::Write;

use serde::Serialize;
use wayfind_paths::{Graph, Renderer, SearchReport, Summary};

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Record<'a> {
    Report(&'a SearchReport),
    Summary(&'a Summary),
}

/// Writes one JSON object per line: a `"kind": "report"` object for every
/// search and a final `"kind": "summary"` object.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, record: &Record<'_>) -> Result<(), Box<dyn Error>> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, _graph: &Graph, report: &SearchReport) -> Result<(), Box<dyn Error>> {
        self.emit(&Record::Report(report))
    }

    fn finish(
        &mut self,
        _graph: &Graph,
        _reports: &[SearchReport],
        summary: &Summary,
    ) -> Result<(), Box<dyn Error>> {
        self.emit(&Record::Summary(summary))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wayfind_core::Coord;
    use wayfind_paths::{Algorithm, NodeId, Orchestrator, Problem};

    #[test]
    fn one_object_per_line() {
        let mut b = Graph::builder();
        b.node(1, Some(Coord::new(0.0, 0.0)))
            .unwrap()
            .node("end", Some(Coord::new(3.0, 4.0)))
            .unwrap()
            .edge(1, "end", Some(5.0))
            .unwrap();
        let problem = Problem::new(b.build(), NodeId::Num(1), vec![NodeId::from("end")]);

        let mut r = JsonRenderer::new(Vec::new());
        Orchestrator::new([Algorithm::Ucs, Algorithm::beam(3)])
            .run(&problem, &mut r)
            .unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        let lines: Vec<Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["kind"], "report");
        assert_eq!(lines[0]["algorithm"], "ucs");
        assert_eq!(lines[0]["heuristic"], "euclidean");
        assert_eq!(lines[0]["result"]["path"], serde_json::json!([1, "end"]));
        assert_eq!(lines[0]["result"]["total_cost"], 5.0);
        assert_eq!(lines[1]["algorithm"], "beam:3");
        assert_eq!(lines[2]["kind"], "summary");
        assert_eq!(lines[2]["runs"], 2);
        assert_eq!(lines[2]["success_rate"], 100.0);
    }
}
