//! Parser for the problem text format.
//!
//! ```text
//! Nodes:
//! 1: (4,1)
//! 2: (2,2)
//! Edges:
//! (2,1): 4
//! (1,2)
//! Origin:
//! 2
//! Destinations:
//! 1; 2
//! ```
//!
//! A line whose label (the text before the first `:`) mentions `Nodes`,
//! `Edges`, `Origin` or `Destinations` starts that section; anything after
//! the colon on the same line is read as a record of the section. Blank
//! lines and lines starting with `#` are ignored. Other lines that do not
//! match their section's record shape are skipped and reported.

use std::fmt;

use regex::Regex;
use wayfind_core::Coord;
use wayfind_paths::{Graph, GraphBuilder, NodeId, Problem};

use crate::error::LoadError;

/// A line the parser ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSkip {
    /// 1-based line number.
    pub line_no: usize,
    pub line: String,
    pub reason: String,
}

impl fmt::Display for ParseSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line_no, self.reason, self.line)
    }
}

/// A parsed problem together with the lines that were skipped.
#[derive(Clone, Debug)]
pub struct Parsed {
    pub problem: Problem,
    pub skipped: Vec<ParseSkip>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Preamble,
    Nodes,
    Edges,
    Origin,
    Destinations,
}

impl Section {
    const HEADERS: [(&'static str, Section); 4] = [
        ("nodes", Section::Nodes),
        ("edges", Section::Edges),
        ("origin", Section::Origin),
        ("destinations", Section::Destinations),
    ];

    /// Recognise a header line; returns the section and the inline rest.
    fn header(line: &str) -> Option<(Section, &str)> {
        if line.starts_with('(') {
            return None;
        }
        let (label, rest) = line.split_once(':').unwrap_or((line, ""));
        let label = label.to_ascii_lowercase();
        Self::HEADERS
            .iter()
            .find(|(key, _)| label.contains(key))
            .map(|&(_, s)| (s, rest.trim()))
    }
}

struct Patterns {
    node: Regex,
    edge: Regex,
    id: Regex,
}

impl Patterns {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            node: Regex::new(r"^([A-Za-z0-9_]+)\s*:\s*\(\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)$")?,
            edge: Regex::new(
                r"^\(\s*([A-Za-z0-9_]+)\s*,\s*([A-Za-z0-9_]+)\s*\)\s*(?::\s*(\S*))?$",
            )?,
            id: Regex::new(r"^[A-Za-z0-9_]+$")?,
        })
    }
}

struct State {
    builder: GraphBuilder,
    origin: Option<NodeId>,
    destinations: Vec<NodeId>,
    skipped: Vec<ParseSkip>,
}

impl State {
    fn skip(&mut self, line_no: usize, line: &str, reason: impl Into<String>) {
        let skip = ParseSkip {
            line_no,
            line: line.to_string(),
            reason: reason.into(),
        };
        log::warn!("skipping {skip}");
        self.skipped.push(skip);
    }
}

/// Parse a problem from text. Edges are added in both directions unless
/// `directed` is set.
pub fn parse_str(text: &str, directed: bool) -> Result<Parsed, LoadError> {
    let pat = Patterns::new()?;
    let mut st = State {
        builder: Graph::builder().directed(directed),
        origin: None,
        destinations: Vec::new(),
        skipped: Vec::new(),
    };
    let mut section = Section::Preamble;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record = match Section::header(line) {
            Some((s, rest)) => {
                section = s;
                if rest.is_empty() {
                    continue;
                }
                rest
            }
            None => line,
        };
        record_line(&pat, &mut st, section, line_no, record)?;
    }

    let origin = st.origin.ok_or(LoadError::MissingOrigin)?;
    if st.destinations.is_empty() {
        return Err(LoadError::NoDestinations);
    }
    let problem = Problem::new(st.builder.build(), origin, st.destinations);
    log::info!(
        "loaded {} nodes, {} edges, origin {}, {} destination(s), {} line(s) skipped",
        problem.graph.node_count(),
        problem.graph.edge_count(),
        problem.origin,
        problem.destinations.len(),
        st.skipped.len()
    );
    Ok(Parsed {
        problem,
        skipped: st.skipped,
    })
}

fn record_line(
    pat: &Patterns,
    st: &mut State,
    section: Section,
    line_no: usize,
    record: &str,
) -> Result<(), LoadError> {
    match section {
        Section::Preamble => st.skip(line_no, record, "record before any section header"),
        Section::Nodes => {
            let Some(c) = pat.node.captures(record) else {
                st.skip(line_no, record, "expected `id: (x,y)`");
                return Ok(());
            };
            let (Ok(x), Ok(y)) = (c[2].parse::<f64>(), c[3].parse::<f64>()) else {
                st.skip(line_no, record, "coordinates are not numbers");
                return Ok(());
            };
            if !(x.is_finite() && y.is_finite()) {
                st.skip(line_no, record, "coordinates are not finite");
                return Ok(());
            }
            st.builder
                .node(NodeId::parse(&c[1]), Some(Coord::new(x, y)))
                .map_err(|source| LoadError::Graph { line_no, source })?;
        }
        Section::Edges => {
            let Some(c) = pat.edge.captures(record) else {
                st.skip(line_no, record, "expected `(u,v): weight`");
                return Ok(());
            };
            let weight = match c.get(3).map(|m| m.as_str()).filter(|w| !w.is_empty()) {
                None => None,
                Some(w) => match w.parse::<f64>() {
                    Ok(w) if w.is_finite() => Some(w),
                    Ok(_) => {
                        st.skip(line_no, record, "weight is not finite");
                        return Ok(());
                    }
                    Err(_) => {
                        st.skip(line_no, record, "weight is not a number");
                        return Ok(());
                    }
                },
            };
            st.builder
                .edge(NodeId::parse(&c[1]), NodeId::parse(&c[2]), weight)
                .map_err(|source| LoadError::Graph { line_no, source })?;
        }
        Section::Origin => {
            if st.origin.is_some() {
                st.skip(line_no, record, "origin already set");
            } else if pat.id.is_match(record) {
                st.origin = Some(NodeId::parse(record));
            } else {
                st.skip(line_no, record, "expected a single node id");
            }
        }
        Section::Destinations => {
            let tokens: Vec<&str> = record
                .split(|c: char| c == ';' || c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
                .collect();
            if let Some(bad) = tokens.iter().find(|t| !pat.id.is_match(t)) {
                st.skip(line_no, record, format!("{bad:?} is not a node id"));
                return Ok(());
            }
            st.destinations.extend(tokens.into_iter().map(NodeId::parse));
        }
    }
    Ok(())
}
