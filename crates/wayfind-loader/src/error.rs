use std::path::PathBuf;

use thiserror::Error;
use wayfind_paths::GraphError;

/// Fatal problems while loading a problem file.
///
/// Malformed lines are not errors; they are collected as
/// [`ParseSkip`](crate::ParseSkip)s.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no origin given")]
    MissingOrigin,

    #[error("no destinations given")]
    NoDestinations,

    #[error("line {line_no}: {source}")]
    Graph {
        line_no: usize,
        #[source]
        source: GraphError,
    },

    #[error("invalid record pattern: {0}")]
    Pattern(#[from] regex::Error),
}
