//! Build script for pathclerk-cli.
//!
//! Generates the `pathclerk.1` man page at build time using clap_mangen.
//! The page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: the command structure is rebuilt here rather than imported, since
//! build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Subcommands and their one-line descriptions.
///
/// Keep this list synchronized with src/cli.rs.
const SUBCOMMANDS: &[(&str, &str)] = &[
    ("normalize", "Normalize paths"),
    ("split", "Split a path into segments"),
    ("join", "Join segments into a path"),
    ("concat", "Concatenate paths"),
    ("root", "Show the root of a path"),
    ("trail", "Show everything but the last segment"),
    ("base", "Show the last segment"),
    ("basename", "Show the last segment without its extension"),
    ("ext", "Show the extension of the last segment"),
    ("depth", "Count the segments of a path"),
    ("deconstruct", "Break a path into trail, basename and extension"),
    ("bisect", "Split a path in two at a segment"),
    ("subpath", "Extract a run of segments"),
    ("index", "Find the index of a segment"),
    ("pop", "Show the segment at a position"),
    ("trim", "Drop segments from either end"),
    ("shared", "Longest common prefix of several paths"),
    ("replace", "Replace a subpath"),
    ("insert", "Insert a subpath"),
    ("append", "Append a subpath"),
    ("remove", "Remove a subpath"),
    ("change-base", "Replace the last segment"),
    ("increment", "Bump the copy counter of the last segment"),
    ("rename", "Give a path a new name"),
    ("change-basename", "Replace the basename, keeping the extension"),
    ("change-ext", "Replace the extension"),
    ("hide", "Prefix the last segment with a dot"),
    ("reveal", "Drop the leading dot from the last segment"),
    ("check", "Answer a question about paths; exits 1 for false"),
    ("ls", "List a directory"),
    ("find", "Search a tree by name"),
    ("search", "Search a tree for similar names"),
    ("kind", "Show what kind of item something is"),
    ("size", "Show the size of an item"),
    ("copy", "Copy an item into a directory"),
    ("move", "Move an item into a directory"),
    ("delete", "Delete items or send them to the trash"),
    ("mkdir", "Create a directory"),
    ("touch", "Create an empty file"),
    ("duplicate", "Copy an item next to itself"),
    ("perms", "Show or change permissions"),
    ("validate", "Validate a configuration file"),
    ("completions", "Generate shell completion scripts"),
];

fn build_cli() -> Command {
    Command::new("pathclerk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manipulate slash-delimited paths and tidy files")
        .long_about(
            "Pure path algebra over slash-delimited strings, plus file operations \
             whose targets are computed with it",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("PATHCLERK_DATA_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for results")
                .value_parser(["text", "json"])
                .global(true),
        )
        .subcommands(
            SUBCOMMANDS
                .iter()
                .map(|(name, about)| Command::new(*name).about(*about)),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathclerk.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
