//! Run configuration.
//!
//! Every field defaults to the fixed values the tool has always used:
//! tokens from `rl_tokens.txt`, sources under `./src/`, `.h`/`.c` files,
//! `external` directories skipped, `rl_` prefix.

use std::path::PathBuf;

use crate::rewrite::DEFAULT_PREFIX;
use crate::walker::SourceFilter;

/// Token list file name, relative to the working directory.
pub const DEFAULT_TOKEN_FILE: &str = "rl_tokens.txt";

/// Target directory, relative to the working directory.
pub const DEFAULT_ROOT: &str = "./src/";

/// Options for a rename run.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// File holding the whitespace-separated tokens
    pub token_file: PathBuf,
    /// Directory to walk
    pub root: PathBuf,
    /// Text inserted before each renamed token
    pub prefix: String,
    /// File selection
    pub filter: SourceFilter,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            root: PathBuf::from(DEFAULT_ROOT),
            prefix: DEFAULT_PREFIX.to_string(),
            filter: SourceFilter::default(),
        }
    }
}

impl RenameOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token list file.
    pub fn token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = path.into();
        self
    }

    /// Set the directory to walk.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = path.into();
        self
    }

    /// Set the rename prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set file filter.
    pub fn filter(mut self, filter: SourceFilter) -> Self {
        self.filter = filter;
        self
    }
}
