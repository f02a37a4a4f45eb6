//! # rlrename
//!
//! Prefix identifier tokens across a C source tree.
//!
//! ## Overview
//!
//! rlrename is built on top of rlrenamelib. It reads a whitespace-separated
//! token list and rewrites every whole-word occurrence of each token in the
//! `.h`/`.c` files under a directory, prefixing it with `rl_`. Directories
//! whose path contains `external` are skipped.
//!
//! Files are overwritten in place. There is no backup, no dry run and no
//! undo, and a second run over the same tree is not guaranteed to be a
//! no-op.
//!
//! ## Usage
//!
//! ```bash
//! # Rename tokens from ./rl_tokens.txt in ./src/
//! rlrename
//!
//! # Another tree and token list
//! rlrename vendor/raylib/src --tokens names.txt
//!
//! # Different prefix, only .c files
//! rlrename --prefix ray_ --ext .c
//!
//! # Machine-readable summary
//! rlrename --output json
//! ```

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use rlrenamelib::{
    rename_tree, RenameOptions, SourceFilter, DEFAULT_EXCLUDE_MARKER, DEFAULT_PREFIX,
    DEFAULT_ROOT, DEFAULT_TOKEN_FILE,
};
use tracing_subscriber::EnvFilter;

use render::OutputMode;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("rlrename")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Prefix whole-word identifier tokens across C source files")
        .arg(
            Arg::new("root")
                .help("Directory to rewrite")
                .default_value(DEFAULT_ROOT),
        )
        .arg(
            Arg::new("tokens")
                .short('t')
                .long("tokens")
                .default_value(DEFAULT_TOKEN_FILE)
                .help("File with whitespace-separated tokens to rename"),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .default_value(DEFAULT_PREFIX)
                .help("Text inserted before each renamed token"),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .action(ArgAction::Append)
                .help("File name suffix to rewrite (repeatable, default: .h and .c)"),
        )
        .arg(
            Arg::new("exclude-marker")
                .long("exclude-marker")
                .default_value(DEFAULT_EXCLUDE_MARKER)
                .help("Skip directories whose path contains this text"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip files matching glob pattern"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Do not print a line per processed file"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<SourceFilter, anyhow::Error> {
    let mut filter = SourceFilter::new();

    if let Some(exts) = matches.get_many::<String>("ext") {
        filter = filter.extensions(exts.cloned());
    }

    if let Some(marker) = matches.get_one::<String>("exclude-marker") {
        filter = filter.exclude_marker(marker.as_str());
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Build rename options from matches
fn build_options(matches: &ArgMatches) -> Result<RenameOptions, anyhow::Error> {
    let mut options = RenameOptions::new().filter(build_filter(matches)?);

    if let Some(root) = matches.get_one::<String>("root") {
        options = options.root(root);
    }
    if let Some(tokens) = matches.get_one::<String>("tokens") {
        options = options.token_file(tokens);
    }
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        options = options.prefix(prefix.as_str());
    }

    Ok(options)
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let options = build_options(matches)?;
    let output_mode: OutputMode = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputMode>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    let quiet = matches.get_flag("quiet");
    tracing::debug!(?options, ?output_mode, "starting rename run");

    let summary = rename_tree(&options, |outcome| {
        if !quiet && !output_mode.is_structured() {
            println!("{}", render::file_line(outcome));
        }
    })?;

    if output_mode.is_structured() {
        println!("{}", render::summary_json(&summary)?);
    } else if !quiet {
        println!("{}", render::summary_line(&summary, &options.root));
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout stays the per-file report.
fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    setup_tracing();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
