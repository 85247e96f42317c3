//! Rasterises a graph and a search path onto a [`Grid`].

use std::collections::HashMap;

use wayfind_core::{Bounds, Cell, Coord, Grid, Point};
use wayfind_paths::{Graph, NodeId, SearchReport};

use crate::palette;

/// Default plot size in cells.
pub const DEFAULT_WIDTH: i32 = 60;
pub const DEFAULT_HEIGHT: i32 = 20;

/// Draws graphs into fixed-size character grids.
///
/// Coordinates are scaled to fill the grid with the y axis pointing up.
/// Edges are dotted lines, the path of a report is drawn over them, and
/// nodes are drawn last with their labels. Nodes without a coordinate are
/// left out, as are their edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plotter {
    width: i32,
    height: i32,
}

impl Default for Plotter {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Plotter {
    /// A plotter for `width` x `height` cells; each side is at least 2.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(2),
            height: height.max(2),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cell of `c` within `bounds`.
    fn project(&self, bounds: &Bounds, c: Coord) -> Point {
        let scale = |v: f64, lo: f64, span: f64, cells: i32| -> i32 {
            if span <= 0.0 {
                return (cells - 1) / 2;
            }
            (((v - lo) / span) * (cells - 1) as f64).round() as i32
        };
        let x = scale(c.x, bounds.min.x, bounds.width(), self.width);
        let y = scale(c.y, bounds.min.y, bounds.height(), self.height);
        Point::new(x, self.height - 1 - y)
    }

    /// Plot `graph`, highlighting the path, origin and goals of `report`.
    pub fn plot(&self, graph: &Graph, report: Option<&SearchReport>) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        let Some(bounds) = graph.bounds() else {
            return grid;
        };

        let cells: HashMap<&NodeId, Point> = graph
            .nodes()
            .filter_map(|id| graph.coordinate(id).ok().map(|c| (id, self.project(&bounds, c))))
            .collect();
        log::debug!(
            "plot: {} of {} nodes placed on {}x{} cells",
            cells.len(),
            graph.node_count(),
            self.width,
            self.height
        );

        for e in graph.edges() {
            if let (Some(&a), Some(&b)) = (cells.get(e.from), cells.get(e.to)) {
                let cell = Cell::new(palette::EDGE_CH).with_style(palette::EDGE);
                draw_segment(&mut grid, a, b, cell);
            }
        }

        if let Some(r) = report {
            for hop in r.result.path.windows(2) {
                if let (Some(&a), Some(&b)) = (cells.get(&hop[0]), cells.get(&hop[1])) {
                    let cell = Cell::new(palette::PATH_CH).with_style(palette::PATH);
                    draw_segment(&mut grid, a, b, cell);
                }
            }
        }

        // Plain nodes first so that markers and path nodes win overlaps.
        let mut order: Vec<(&NodeId, Point)> = cells.iter().map(|(&id, &p)| (id, p)).collect();
        order.sort_by_key(|&(id, _)| (rank(id, report), id));
        for (id, p) in order {
            let (ch, style) = marker(id, report);
            grid.set(p, Cell::new(ch).with_style(style));
            grid.set_text(p.shift(1, 0), &id.to_string(), palette::LABEL);
        }
        grid
    }
}

/// Draw the segment between two node cells without touching the endpoints.
fn draw_segment(grid: &mut Grid, a: Point, b: Point, cell: Cell) {
    for p in a.line_to(b) {
        if p != a && p != b {
            grid.set(p, cell);
        }
    }
}

fn rank(id: &NodeId, report: Option<&SearchReport>) -> u8 {
    match report {
        Some(r) if r.origin == *id || r.goals.contains(id) => 2,
        Some(r) if r.result.path.contains(id) => 1,
        _ => 0,
    }
}

fn marker(id: &NodeId, report: Option<&SearchReport>) -> (char, wayfind_core::Style) {
    match report {
        Some(r) if r.origin == *id => (palette::ORIGIN_CH, palette::ORIGIN),
        Some(r) if r.goals.contains(id) => (palette::GOAL_CH, palette::GOAL),
        Some(r) if r.result.path.contains(id) => (palette::PATH_CH, palette::PATH),
        _ => (palette::NODE_CH, palette::NODE),
    }
}
