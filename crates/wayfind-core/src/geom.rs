//! Geometry: integer canvas cells ([`Point`]) and real graph coordinates
//! ([`Coord`], [`Bounds`]).

use std::fmt;
use std::ops::Sub;

/// A cell position on a canvas. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The cells of the Bresenham segment from `self` to `to`, both ends
    /// included. Consecutive cells touch, diagonals included.
    pub fn line_to(self, to: Point) -> Vec<Point> {
        let (dx, dy) = ((to.x - self.x).abs(), -(to.y - self.y).abs());
        let (sx, sy) = ((to.x - self.x).signum(), (to.y - self.y).signum());
        let mut err = dx + dy;
        let mut p = self;
        let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
        loop {
            cells.push(p);
            if p == to {
                return cells;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                p.x += sx;
            }
            if e2 <= dx {
                err += dx;
                p.y += sy;
            }
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position in the plane. Y grows up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Closed axis-aligned box around a set of coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    /// The box of `coords`, or `None` when there are none.
    pub fn of(coords: impl IntoIterator<Item = Coord>) -> Option<Self> {
        coords.into_iter().fold(None, |acc, c| {
            Some(match acc {
                None => Bounds { min: c, max: c },
                Some(b) => Bounds {
                    min: Coord::new(b.min.x.min(c.x), b.min.y.min(c.y)),
                    max: Coord::new(b.max.x.max(c.x), b.max.y.max(c.y)),
                },
            })
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
