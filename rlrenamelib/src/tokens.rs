//! Token list loading.
//!
//! A token list is a plain text file of whitespace-separated identifiers.
//! Duplicates are dropped and the first-seen order is kept, since the
//! rewriter applies tokens in exactly this order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::RenameError;
use crate::Result;

/// Ordered, duplicate-free list of tokens to rename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    /// Build a list from tokens in order, dropping repeats.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut list = Vec::new();

        for token in tokens {
            let token = token.into();
            if token.is_empty() {
                continue;
            }
            if seen.insert(token.clone()) {
                list.push(token);
            }
        }

        Self { tokens: list }
    }

    /// Split text on any run of whitespace.
    pub fn parse(text: &str) -> Self {
        Self::from_tokens(text.split_whitespace())
    }

    /// Read and parse a token list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RenameError::ConfigMissing {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(&text);
        tracing::debug!(path = %path.display(), tokens = list.len(), "loaded token list");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }
}
