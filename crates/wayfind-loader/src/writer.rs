use wayfind_paths::Problem;

/// Render `problem` in the text format read by [`parse_str`](crate::parse_str).
///
/// Nodes without a coordinate are implied by their edges. In an undirected
/// graph each edge is written once.
pub fn write_problem(problem: &Problem) -> String {
    let g = &problem.graph;
    let mut out = String::from("Nodes:\n");
    for id in g.nodes() {
        if let Ok(c) = g.coordinate(id) {
            out.push_str(&format!("{id}: ({},{})\n", c.x, c.y));
        }
    }
    out.push_str("Edges:\n");
    for e in g.edges() {
        out.push_str(&format!("({},{}): {}\n", e.from, e.to, e.weight));
    }
    out.push_str(&format!("Origin:\n{}\n", problem.origin));
    let dests: Vec<String> = problem.destinations.iter().map(ToString::to_string).collect();
    out.push_str(&format!("Destinations:\n{}\n", dests.join("; ")));
    out
}
