//! Search settings: config file loading and merging with the command line.
//!
//! Precedence is command-line flag, then config file, then the built-in
//! default.

use std::fmt;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use wayfind_paths::{Algorithm, DEFAULT_BEAM_WIDTH, GoalMode, HeuristicKind, UnknownAlgorithm};
use wayfind_render::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

use crate::cli::{Format, SearchArgs};

/// One strategy or all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Selection {
    All,
    One(Algorithm),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::One(Algorithm::default())
    }
}

impl FromStr for Selection {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::One)
    }
}

impl TryFrom<String> for Selection {
    type Error = UnknownAlgorithm;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::One(a) => a.fmt(f),
        }
    }
}

/// Contents of a TOML config file. Every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub algorithm: Option<Selection>,
    pub beam_width: Option<usize>,
    pub heuristic: Option<HeuristicKind>,
    pub goal_mode: Option<GoalMode>,
    pub directed: Option<bool>,
    pub plot: Option<bool>,
    pub color: Option<bool>,
    pub format: Option<Format>,
    pub log_level: Option<String>,
    pub plot_width: Option<i32>,
    pub plot_height: Option<i32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings of a `search` run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub selection: Selection,
    pub beam_width: Option<usize>,
    pub heuristic: HeuristicKind,
    pub goal_mode: GoalMode,
    pub directed: bool,
    pub plot: bool,
    pub color: bool,
    pub format: Format,
    pub plot_width: i32,
    pub plot_height: i32,
}

impl Settings {
    pub fn resolve(args: &SearchArgs, file: &FileConfig) -> Self {
        Self {
            selection: args.algorithm.or(file.algorithm).unwrap_or_default(),
            beam_width: args.beam_width.or(file.beam_width),
            heuristic: args.heuristic.or(file.heuristic).unwrap_or_default(),
            goal_mode: args.goal_mode.or(file.goal_mode).unwrap_or_default(),
            directed: args.directed || file.directed.unwrap_or(false),
            plot: args.plot || file.plot.unwrap_or(false),
            color: !args.no_color && file.color.unwrap_or(true),
            format: args.format.or(file.format).unwrap_or_default(),
            plot_width: file.plot_width.unwrap_or(DEFAULT_WIDTH),
            plot_height: file.plot_height.unwrap_or(DEFAULT_HEIGHT),
        }
    }

    /// The strategies to run. An explicit beam width overrides the one in
    /// a `beam:K` key.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self.selection {
            Selection::All => {
                Algorithm::all(self.beam_width.unwrap_or(DEFAULT_BEAM_WIDTH)).to_vec()
            }
            Selection::One(Algorithm::Beam { width }) => {
                vec![Algorithm::beam(self.beam_width.unwrap_or(width))]
            }
            Selection::One(a) => vec![a],
        }
    }

    /// Colour only when enabled and stdout is a terminal.
    pub fn use_color(&self) -> bool {
        self.color && io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::resolve(&SearchArgs::default(), &FileConfig::default());
        assert_eq!(s.algorithms(), vec![Algorithm::AStar]);
        assert_eq!(s.heuristic, HeuristicKind::Euclidean);
        assert_eq!(s.goal_mode, GoalMode::Each);
        assert!(!s.directed && !s.plot && s.color);
        assert_eq!(s.format, Format::Text);
        assert_eq!((s.plot_width, s.plot_height), (60, 20));
    }

    #[test]
    fn file_values_apply_and_flags_win() {
        let file: FileConfig = toml::from_str(
            r#"
            algorithm = "all"
            beam_width = 3
            heuristic = "manhattan"
            goal_mode = "any"
            color = false
            format = "json"
            plot_width = 40
            "#,
        )
        .unwrap();
        let s = Settings::resolve(&SearchArgs::default(), &file);
        assert_eq!(s.selection, Selection::All);
        assert_eq!(s.algorithms().len(), 7);
        assert_eq!(s.algorithms()[6], Algorithm::Beam { width: 3 });
        assert_eq!(s.goal_mode, GoalMode::Any);
        assert!(!s.color);
        assert_eq!(s.plot_width, 40);

        let args = SearchArgs {
            algorithm: Some(Selection::One(Algorithm::Ucs)),
            heuristic: Some(HeuristicKind::Zero),
            format: Some(Format::Text),
            ..SearchArgs::default()
        };
        let s = Settings::resolve(&args, &file);
        assert_eq!(s.algorithms(), vec![Algorithm::Ucs]);
        assert_eq!(s.heuristic, HeuristicKind::Zero);
        assert_eq!(s.format, Format::Text);
    }

    #[test]
    fn beam_width_flag_overrides_key() {
        let args = SearchArgs {
            algorithm: Some("beam:5".parse().unwrap()),
            ..SearchArgs::default()
        };
        let s = Settings::resolve(&args, &FileConfig::default());
        assert_eq!(s.algorithms(), vec![Algorithm::Beam { width: 5 }]);
        let args = SearchArgs {
            beam_width: Some(1),
            ..args
        };
        let s = Settings::resolve(&args, &FileConfig::default());
        assert_eq!(s.algorithms(), vec![Algorithm::Beam { width: 1 }]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("algorithm = \"bfs\"\nspeed = 3\n").is_err());
        assert!(toml::from_str::<FileConfig>("algorithm = \"dijkstra\"\n").is_err());
    }

    #[test]
    fn load_reports_path() {
        let err = FileConfig::load(Path::new("/nonexistent/wayfind.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/wayfind.toml"));
    }
}
