//! Whole-word token substitution.
//!
//! Each token becomes a `\b<token>\b` pattern. Patterns are applied one at
//! a time, in token-list order, each to the output of the previous one.
//! A later token can therefore match text inserted by an earlier
//! replacement: with `["Foo", "rl_Foo"]`, `Foo` ends up as `rl_rl_Foo`.
//! Running the rewriter twice over the same file is not idempotent.

use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};
use serde::Serialize;

use crate::error::RenameError;
use crate::tokens::TokenList;
use crate::Result;

/// Prefix inserted in front of each renamed token by default.
pub const DEFAULT_PREFIX: &str = "rl_";

#[derive(Debug, Clone)]
struct Rule {
    token: String,
    pattern: Regex,
    replacement: String,
}

/// Compiled substitution rules for one token list.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: Vec<Rule>,
}

/// Text after substitution, with the number of replacements made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub text: String,
    pub replacements: usize,
}

/// Result of rewriting one file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: std::path::PathBuf,
    pub replacements: usize,
    pub changed: bool,
}

impl Rewriter {
    /// Compile one word-boundary pattern per token.
    ///
    /// Tokens are matched literally; regex metacharacters are escaped.
    pub fn new(tokens: &TokenList, prefix: &str) -> Result<Self> {
        let rules = tokens
            .iter()
            .map(|token| -> Result<Rule> {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(token))).map_err(
                    |e| RenameError::InvalidToken {
                        token: token.to_string(),
                        message: e.to_string(),
                    },
                )?;
                Ok(Rule {
                    token: token.to_string(),
                    pattern,
                    replacement: format!("{prefix}{token}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order to `text`.
    pub fn apply(&self, text: &str) -> Rewritten {
        let mut content = text.to_string();
        let mut replacements = 0;

        for rule in &self.rules {
            let hits = rule.pattern.find_iter(&content).count();
            if hits == 0 {
                continue;
            }
            tracing::trace!(token = %rule.token, hits, "replacing token");
            content = rule
                .pattern
                .replace_all(&content, NoExpand(&rule.replacement))
                .into_owned();
            replacements += hits;
        }

        Rewritten {
            text: content,
            replacements,
        }
    }

    /// Rewrite a file in place.
    ///
    /// The whole file is read, transformed, and written back with
    /// truncation, even when no token matched. There is no backup and no
    /// temp-file swap; a failed write can leave the file truncated.
    pub fn rewrite_file(&self, path: impl AsRef<Path>) -> Result<FileOutcome> {
        let path = path.as_ref();
        let original = fs::read_to_string(path).map_err(|source| RenameError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let rewritten = self.apply(&original);
        write_back(path, &rewritten.text)?;

        Ok(FileOutcome {
            path: path.to_path_buf(),
            replacements: rewritten.replacements,
            changed: rewritten.text != original,
        })
    }
}

fn write_back(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| RenameError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
