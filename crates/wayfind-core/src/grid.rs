//! A fixed-size character canvas.

use crate::cell::Cell;
use crate::geom::Point;
use crate::style::Style;

/// Row-major grid of [`Cell`]s. Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// A blank grid. Negative sizes count as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// The cell at `p`; blank outside the grid.
    pub fn at(&self, p: Point) -> Cell {
        self.index(p).map_or(Cell::BLANK, |i| self.cells[i])
    }

    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Write `text` rightwards from `p`, clipped to the grid. Returns the
    /// number of characters that landed.
    pub fn set_text(&mut self, p: Point, text: &str, style: Style) -> usize {
        let mut written = 0;
        for (q, ch) in (0..).map(|dx| p.shift(dx, 0)).zip(text.chars()) {
            if self.contains(q) {
                self.set(q, Cell::new(ch).with_style(style));
                written += 1;
            }
        }
        written
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// The characters alone, one line per row, trailing blanks trimmed.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.ch).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
