//! Colours and glyphs of the graph plot.

use wayfind_core::{Color, Style};

pub const EDGE: Style = Style::fg(Color::Rgb(0x58, 0x6e, 0x75)).dim();
pub const PATH: Style = Style::fg(Color::Rgb(0xdc, 0x32, 0x2f)).bold();
pub const NODE: Style = Style::fg(Color::Rgb(0x26, 0x8b, 0xd2));
pub const ORIGIN: Style = Style::fg(Color::Rgb(0x85, 0x99, 0x00)).bold();
pub const GOAL: Style = Style::fg(Color::Rgb(0xb5, 0x89, 0x00)).bold();
pub const LABEL: Style = Style::PLAIN;

pub const EDGE_CH: char = '.';
pub const PATH_CH: char = '*';
pub const NODE_CH: char = 'o';
pub const ORIGIN_CH: char = 'S';
pub const GOAL_CH: char = 'G';
