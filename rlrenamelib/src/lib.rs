//! # rlrenamelib
//!
//! Bulk, whole-word identifier renaming across a tree of C sources.
//!
//! ## Overview
//!
//! Given a list of tokens, every whole-word occurrence of each token in every
//! `.h`/`.c` file under a directory is prefixed with a tag (`rl_` by
//! default). Directories whose path contains `external` are left alone, so
//! vendored dependencies keep their original names.
//!
//! The work is plain text substitution: there is no C parsing, so tokens
//! inside comments and string literals are renamed too.
//!
//! - **Token list**: whitespace-separated, deduplicated, first-seen order
//! - **Walker**: lazy directory walk with suffix and exclusion filtering
//! - **Rewriter**: sequential `\b<token>\b` substitution, written back in place
//!
//! Tokens are applied one after another on the evolving text. A token
//! listed after `Foo` that equals `rl_Foo` will match the text the first
//! replacement inserted. Runs are not idempotent and there is no undo.
//!
//! ## Example
//!
//! ```rust
//! use rlrenamelib::{rename_tree, RenameOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("rl_tokens.txt"), "Data\n").unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! let file_path = dir.path().join("src/a.c");
//! fs::write(&file_path, "Data data2 MyData").unwrap();
//!
//! let options = RenameOptions::new()
//!     .token_file(dir.path().join("rl_tokens.txt"))
//!     .root(dir.path().join("src"));
//! let summary = rename_tree(&options, |_| {}).unwrap();
//!
//! assert_eq!(summary.files.len(), 1);
//! assert_eq!(fs::read_to_string(&file_path).unwrap(), "rl_Data data2 MyData");
//! ```

pub mod error;
pub mod options;
pub mod rewrite;
pub mod runner;
pub mod tokens;
pub mod walker;

pub use error::RenameError;
pub use options::{RenameOptions, DEFAULT_ROOT, DEFAULT_TOKEN_FILE};
pub use rewrite::{FileOutcome, Rewriter, Rewritten, DEFAULT_PREFIX};
pub use runner::{rename_tree, RunSummary};
pub use tokens::TokenList;
pub use walker::{
    walk_sources, SourceFilter, SourceWalk, DEFAULT_EXCLUDE_MARKER, DEFAULT_EXTENSIONS,
};

/// Result type for rlrenamelib operations
pub type Result<T> = std::result::Result<T, RenameError>;
