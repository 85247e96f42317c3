//! One character of a [`Grid`](crate::Grid).

use crate::style::Style;

/// A styled character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub const BLANK: Self = Self::new(' ');

    /// `ch` in the plain style.
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::PLAIN,
        }
    }

    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Whether the cell shows nothing: a plain space.
    pub const fn is_blank(&self) -> bool {
        self.ch == ' ' && self.style.is_plain()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
