//! Error types for rlrenamelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while renaming tokens
#[derive(Error, Debug)]
pub enum RenameError {
    /// The token list file is missing or unreadable
    #[error("failed to read token list '{path}': {source}")]
    ConfigMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a source file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a source file back
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A token could not be compiled into a word-boundary pattern
    #[error("invalid token '{token}': {message}")]
    InvalidToken { token: String, message: String },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },
}

impl RenameError {
    /// True for the read/write failures on selected source files.
    pub fn is_file_io(&self) -> bool {
        matches!(self, Self::FileRead { .. } | Self::FileWrite { .. })
    }
}
