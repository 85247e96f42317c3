use wayfind_core::Coord;

/// Straight-line (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
