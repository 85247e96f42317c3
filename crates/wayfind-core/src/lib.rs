//! **wayfind-core**: geometry and canvas types shared by the *wayfind*
//! crates.
//!
//! Graph coordinates are real-valued [`Coord`]s; the renderer rasterises
//! them onto a [`Grid`] of styled [`Cell`]s addressed by integer [`Point`]s.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod style;

pub use cell::Cell;
pub use geom::{Bounds, Coord, Point};
pub use grid::Grid;
pub use style::{Color, Style, Weight};
