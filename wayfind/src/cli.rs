//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use wayfind_paths::{GoalMode, HeuristicKind};

use crate::config::Selection;

/// Pathfinding over small weighted 2-D graphs.
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level or filter spec (e.g. `debug`, `wayfind_paths=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one or more strategies on a problem file
    Search(SearchArgs),

    /// Write a random problem in the text format
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Problem file
    pub file: PathBuf,

    /// bfs, dfs, ucs, gbfs, astar, idastar, beam, beam:K, or all
    #[arg(long, short)]
    pub algorithm: Option<Selection>,

    /// Candidates kept per layer by beam search
    #[arg(long)]
    pub beam_width: Option<usize>,

    /// euclidean, manhattan, chebyshev, or zero
    #[arg(long)]
    pub heuristic: Option<HeuristicKind>,

    /// Search each destination separately, or stop at any of them
    #[arg(long)]
    pub goal_mode: Option<GoalMode>,

    /// Treat edges as one-way
    #[arg(long)]
    pub directed: bool,

    /// Draw the graph and path after each table
    #[arg(long)]
    pub plot: bool,

    /// Plain plot output without terminal colours
    #[arg(long)]
    pub no_color: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// TOML file with defaults for the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of nodes
    #[arg(long, default_value_t = 10)]
    pub nodes: usize,

    /// Nearest neighbours each node is linked to
    #[arg(long, default_value_t = 3)]
    pub degree: usize,

    /// Width of the coordinate area
    #[arg(long, default_value_t = 20)]
    pub width: i32,

    /// Height of the coordinate area
    #[arg(long, default_value_t = 20)]
    pub height: i32,

    /// Number of destinations
    #[arg(long, default_value_t = 1)]
    pub destinations: usize,

    /// Random seed; omit for a fresh graph every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}
