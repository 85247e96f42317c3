//! Colours and emphasis of plot glyphs.

/// A terminal colour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Whatever the terminal is already using.
    #[default]
    Default,
    Rgb(u8, u8, u8),
}

/// Emphasis of a glyph. Terminals render at most one of these at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

/// Foreground, background and weight of one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub weight: Weight,
}

impl Style {
    /// No colour, normal weight.
    pub const PLAIN: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        weight: Weight::Normal,
    };

    /// Plain style with foreground `fg`.
    pub const fn fg(fg: Color) -> Self {
        Self { fg, ..Self::PLAIN }
    }

    pub const fn bold(self) -> Self {
        Self {
            weight: Weight::Bold,
            ..self
        }
    }

    pub const fn dim(self) -> Self {
        Self {
            weight: Weight::Dim,
            ..self
        }
    }

    /// Whether writing the style needs no escape sequence.
    pub const fn is_plain(self) -> bool {
        matches!(
            self,
            Style {
                fg: Color::Default,
                bg: Color::Default,
                weight: Weight::Normal,
            }
        )
    }
}
