//! **wayfind-render**: presentation of search reports.
//!
//! - [`TextRenderer`] prints a performance table per search and a
//!   comparison table for batches, optionally followed by a plot.
//! - [`Plotter`] draws the graph and a path onto a character [`Grid`](wayfind_core::Grid);
//!   [`write_grid`] sends it to a terminal, coloured through crossterm.
//! - [`JsonRenderer`] writes line-delimited JSON.

mod json;
mod palette;
mod plot;
mod table;
mod term;

pub use json::JsonRenderer;
pub use plot::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Plotter};
pub use table::{TextRenderer, format_path};
pub use term::write_grid;
