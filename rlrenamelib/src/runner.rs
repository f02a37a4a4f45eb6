//! High-level rename API.
//!
//! `rename_tree` is the whole pipeline: load the token list once, walk the
//! target directory, and rewrite each selected file in walk order. The
//! first error stops the run; files already rewritten stay rewritten.

use serde::Serialize;

use crate::options::RenameOptions;
use crate::rewrite::{FileOutcome, Rewriter};
use crate::tokens::TokenList;
use crate::walker::walk_sources;
use crate::Result;

/// Result of a rename run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Number of distinct tokens loaded
    pub tokens: usize,
    /// Every processed file, in processing order
    pub files: Vec<FileOutcome>,
    /// Replacements across all files
    pub replacements: usize,
    /// Files whose content differs after rewriting
    pub changed_files: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: FileOutcome) {
        self.replacements += outcome.replacements;
        if outcome.changed {
            self.changed_files += 1;
        }
        self.files.push(outcome);
    }
}

/// Run the rename over `options.root`.
///
/// `on_file` is called right after each file has been rewritten.
///
/// # Example
///
/// ```rust,ignore
/// use rlrenamelib::{rename_tree, RenameOptions};
///
/// let summary = rename_tree(&RenameOptions::new(), |outcome| {
///     println!("Processed file: {}", outcome.path.display());
/// })?;
/// ```
pub fn rename_tree<F>(options: &RenameOptions, mut on_file: F) -> Result<RunSummary>
where
    F: FnMut(&FileOutcome),
{
    let tokens = TokenList::load(&options.token_file)?;
    let rewriter = Rewriter::new(&tokens, &options.prefix)?;

    let mut summary = RunSummary {
        tokens: tokens.len(),
        ..RunSummary::default()
    };

    for path in walk_sources(&options.root, &options.filter) {
        let outcome = rewriter.rewrite_file(&path)?;
        tracing::info!(
            path = %outcome.path.display(),
            replacements = outcome.replacements,
            "rewrote file"
        );
        on_file(&outcome);
        summary.record(outcome);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenameError;
    use crate::walker::SourceFilter;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn setup(dir: &Path, tokens: &str) -> RenameOptions {
        fs::write(dir.join("rl_tokens.txt"), tokens).unwrap();
        fs::create_dir_all(dir.join("src")).unwrap();
        RenameOptions::new()
            .token_file(dir.join("rl_tokens.txt"))
            .root(dir.join("src"))
    }

    #[test]
    fn test_renames_whole_words() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Data");
        fs::write(temp.path().join("src/a.c"), "Data data2 MyData").unwrap();

        let summary = rename_tree(&opts, |_| {}).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("src/a.c")).unwrap(),
            "rl_Data data2 MyData"
        );
        assert_eq!(summary.tokens, 1);
        assert_eq!(summary.files.len(), 1);
        assert_eq!(summary.replacements, 1);
        assert_eq!(summary.changed_files, 1);
    }

    #[test]
    fn test_external_untouched() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Node");
        fs::create_dir_all(temp.path().join("src/external")).unwrap();
        fs::write(temp.path().join("src/external/lib.c"), "Node x;").unwrap();

        let summary = rename_tree(&opts, |_| {}).unwrap();

        assert_eq!(
            fs::read(temp.path().join("src/external/lib.c")).unwrap(),
            b"Node x;"
        );
        assert!(summary.files.is_empty());
    }

    #[test]
    fn test_file_root_inside_external_untouched() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Node").root(temp.path().join("src/external/lib.c"));
        fs::create_dir_all(temp.path().join("src/external")).unwrap();
        fs::write(temp.path().join("src/external/lib.c"), "Node x;").unwrap();

        let summary = rename_tree(&opts, |_| {}).unwrap();

        assert!(summary.files.is_empty());
        assert_eq!(
            fs::read_to_string(temp.path().join("src/external/lib.c")).unwrap(),
            "Node x;"
        );
    }

    #[test]
    fn test_other_extensions_untouched() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Node");
        fs::write(temp.path().join("src/node.cpp"), "Node n;").unwrap();
        fs::write(temp.path().join("src/NODE.H"), "Node n;").unwrap();
        fs::write(temp.path().join("src/node.h"), "Node n;").unwrap();

        let summary = rename_tree(&opts, |_| {}).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("src/node.cpp")).unwrap(),
            "Node n;"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("src/NODE.H")).unwrap(),
            "Node n;"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("src/node.h")).unwrap(),
            "rl_Node n;"
        );
        assert_eq!(summary.files.len(), 1);
    }

    #[test]
    fn test_double_prefix_reproduced() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Foo rl_Foo");
        fs::write(temp.path().join("src/foo.h"), "Foo").unwrap();

        rename_tree(&opts, |_| {}).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("src/foo.h")).unwrap(),
            "rl_rl_Foo"
        );
    }

    #[test]
    fn test_second_run_reprefixes() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "rl_Foo Foo");
        fs::write(temp.path().join("src/foo.c"), "Foo f;").unwrap();

        rename_tree(&opts, |_| {}).unwrap();
        let after_first = fs::read_to_string(temp.path().join("src/foo.c")).unwrap();
        rename_tree(&opts, |_| {}).unwrap();
        let after_second = fs::read_to_string(temp.path().join("src/foo.c")).unwrap();

        assert_eq!(after_first, "rl_Foo f;");
        assert_eq!(after_second, "rl_rl_Foo f;");
    }

    #[test]
    fn test_observer_sees_each_file_in_order() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Image");
        fs::create_dir_all(temp.path().join("src/core")).unwrap();
        fs::write(temp.path().join("src/rcore.c"), "Image i;").unwrap();
        fs::write(temp.path().join("src/core/rtext.c"), "int x;").unwrap();

        let mut seen = Vec::new();
        let summary = rename_tree(&opts, |outcome| seen.push(outcome.path.clone())).unwrap();

        assert_eq!(
            seen,
            vec![
                temp.path().join("src/rcore.c"),
                temp.path().join("src/core/rtext.c")
            ]
        );
        assert_eq!(summary.changed_files, 1);
    }

    #[test]
    fn test_missing_token_file_rewrites_nothing() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/a.c"), "Data").unwrap();
        let opts = RenameOptions::new()
            .token_file(temp.path().join("rl_tokens.txt"))
            .root(temp.path().join("src"));

        let result = rename_tree(&opts, |_| {});

        assert!(matches!(result, Err(RenameError::ConfigMissing { .. })));
        assert_eq!(
            fs::read_to_string(temp.path().join("src/a.c")).unwrap(),
            "Data"
        );
    }

    #[test]
    fn test_missing_root_is_empty_run() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Data").root(temp.path().join("nope"));

        let summary = rename_tree(&opts, |_| {}).unwrap();

        assert!(summary.files.is_empty());
    }

    #[test]
    fn test_unreadable_source_is_fatal() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Data");
        fs::write(temp.path().join("src/a.c"), "Data").unwrap();
        fs::write(temp.path().join("src/b.c"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(temp.path().join("src/c.c"), "Data").unwrap();

        let result = rename_tree(&opts, |_| {});

        assert!(matches!(result, Err(RenameError::FileRead { .. })));
        assert_eq!(
            fs::read_to_string(temp.path().join("src/a.c")).unwrap(),
            "rl_Data"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("src/c.c")).unwrap(),
            "Data"
        );
    }

    #[test]
    fn test_unwritable_source_is_fatal() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Data");
        fs::write(temp.path().join("src/a.c"), "Data").unwrap();
        fs::write(temp.path().join("src/b.c"), "Data").unwrap();
        fs::write(temp.path().join("src/c.c"), "Data").unwrap();

        let locked = temp.path().join("src/b.c");
        let mut perms = fs::metadata(&locked).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&locked, perms).unwrap();
        // Privileged users write through read-only permissions.
        if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
            return;
        }

        let result = rename_tree(&opts, |_| {});

        match result {
            Err(RenameError::FileWrite { path, .. }) => assert_eq!(path, locked),
            other => panic!("Expected FileWrite error, got {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(temp.path().join("src/a.c")).unwrap(),
            "rl_Data"
        );
        assert_eq!(fs::read_to_string(&locked).unwrap(), "Data");
        assert_eq!(
            fs::read_to_string(temp.path().join("src/c.c")).unwrap(),
            "Data"
        );
    }

    #[test]
    fn test_custom_filter_and_prefix() {
        let temp = tempdir().unwrap();
        let opts = setup(temp.path(), "Data")
            .prefix("ns_")
            .filter(SourceFilter::new().extensions([".c"]));
        fs::write(temp.path().join("src/a.c"), "Data").unwrap();
        fs::write(temp.path().join("src/a.h"), "Data").unwrap();

        rename_tree(&opts, |_| {}).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("src/a.c")).unwrap(),
            "ns_Data"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("src/a.h")).unwrap(),
            "Data"
        );
    }
}
