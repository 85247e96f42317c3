//! Writing a [`Grid`] to a terminal stream.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{
        Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
};
use wayfind_core::{Color, Grid, Style, Weight};

fn to_ct_color(c: Color) -> CtColor {
    match c {
        Color::Default => CtColor::Reset,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
    }
}

fn queue_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(to_ct_color(style.fg)),
        SetBackgroundColor(to_ct_color(style.bg))
    )?;
    match style.weight {
        Weight::Normal => Ok(()),
        Weight::Bold => queue!(out, SetAttribute(Attribute::Bold)),
        Weight::Dim => queue!(out, SetAttribute(Attribute::Dim)),
    }
}

/// Write `grid` row by row. With `color` off, or for unstyled cells, only
/// the characters are written. Trailing blanks of each row are dropped.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, color: bool) -> io::Result<()> {
    if !color {
        out.write_all(grid.to_plain_string().as_bytes())?;
        return out.flush();
    }
    for row in grid.rows() {
        let used = row
            .iter()
            .rposition(|c| !c.is_blank())
            .map_or(0, |i| i + 1);
        for cell in &row[..used] {
            if cell.style.is_plain() {
                queue!(out, Print(cell.ch))?;
                continue;
            }
            queue_style(out, cell.style)?;
            queue!(out, Print(cell.ch), SetAttribute(Attribute::Reset))?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::{Cell, Point};

    fn grid() -> Grid {
        let mut g = Grid::new(4, 2);
        g.set(Point::new(0, 0), Cell::new('a'));
        g.set(
            Point::new(1, 1),
            Cell::new('b').with_style(Style::fg(Color::Rgb(255, 0, 0))),
        );
        g
    }

    #[test]
    fn plain_output() {
        let mut out = Vec::new();
        write_grid(&mut out, &grid(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n b\n");
    }

    #[test]
    fn colored_output_wraps_styled_cells() {
        let mut out = Vec::new();
        write_grid(&mut out, &grid(), true).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("a\n "));
        assert!(s.contains("\x1b["));
        assert!(s.contains('b'));
        assert!(s.ends_with('\n'));
    }

    #[test]
    fn default_color_maps_to_reset() {
        assert_eq!(to_ct_color(Color::Default), CtColor::Reset);
        assert_eq!(to_ct_color(Color::Rgb(1, 2, 3)), CtColor::Rgb { r: 1, g: 2, b: 3 });
    }
}
