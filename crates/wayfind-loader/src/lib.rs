//! **wayfind-loader**: reads search problems from the line-oriented text
//! format and writes them back.
//!
//! [`TextLoader`] implements [`GraphLoader`] for files; [`parse_str`] does
//! the work on an in-memory string and also returns the skipped lines.

mod error;
mod parse;
mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use wayfind_paths::{GraphLoader, Problem};

pub use error::LoadError;
pub use parse::{ParseSkip, Parsed, parse_str};
pub use writer::write_problem;

/// Loads a [`Problem`] from a file in the text format.
#[derive(Clone, Debug)]
pub struct TextLoader {
    path: PathBuf,
    directed: bool,
}

impl TextLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            directed: false,
        }
    }

    /// Read edges as one-way.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file, keeping the list of skipped lines.
    pub fn load_parsed(&self) -> Result<Parsed, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::FileNotFound(self.path.clone()));
        }
        let text = fs::read_to_string(&self.path)?;
        log::debug!("read {} bytes from {}", text.len(), self.path.display());
        parse_str(&text, self.directed)
    }
}

impl GraphLoader for TextLoader {
    type Error = LoadError;

    fn load(&self) -> Result<Problem, LoadError> {
        Ok(self.load_parsed()?.problem)
    }
}
