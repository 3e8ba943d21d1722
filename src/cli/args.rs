//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! Available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--root <path>`: Store root; overrides `ARTIFACT_STORE_ROOT`
//! - `-v` / `--verbose`: Progress output on stderr

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Artifact Store - local, filesystem-backed, revisioned artifact repository
#[derive(Parser, Debug)]
#[command(name = "artifact-store")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the artifact store root; overrides ARTIFACT_STORE_ROOT
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Verbose progress output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the store root (idempotent)
    #[command(
        name = "init",
        long_about = "Initialize the store root.\n\n\
            Creates the root directory if needed and writes the sentinel \
            marker file that every other command checks for. Re-running \
            init on an already-initialized root succeeds and changes nothing."
    )]
    Init,

    /// Store a new revision of an artifact
    #[command(
        name = "store",
        long_about = "Store a new revision of an artifact.\n\n\
            Archives the contents of a source directory into a single \
            .tar.xz file, writes the revision's metadata document, and \
            optionally points tags at the new revision. Revision numbers \
            are caller-supplied and must be unique per artifact; storing \
            an existing revision fails before anything is written.",
        after_help = "\
EXAMPLES:
    # Store revision 1 of artifact1, tagged latest
    artifact-store store -r 1 -t latest project/a artifact1 ./build

    # Attach metadata and exclude intermediate files
    artifact-store store -r 2 -m commit=abc123 --exclude '*.o' project/a artifact1 ./build"
    )]
    Store {
        /// Revision number to create
        #[arg(short, long, value_name = "N")]
        revision: u64,

        /// Tag(s) to point at the new revision
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Metadata pair(s), each KEY=VALUE
        #[arg(short = 'm', long = "meta", value_name = "KEY=VALUE")]
        meta: Vec<String>,

        /// Glob pattern(s) of paths to leave out of the archive
        #[arg(long = "exclude", value_name = "PATTERN")]
        exclude: Vec<String>,

        /// Copy files instead of archiving (not implemented)
        #[arg(short = 'c', long = "copy")]
        copy: bool,

        /// Namespace of the artifact
        namespace: String,

        /// Artifact name
        artifact: String,

        /// Directory whose contents are archived
        source_dir: PathBuf,
    },

    /// Show or edit a revision's metadata
    #[command(
        name = "meta",
        long_about = "Show or edit a revision's metadata.\n\n\
            Without edits, prints the revision's user metadata as sorted, \
            indented JSON. Each edit token is applied left to right: \
            KEY=VALUE sets a key, KEY= deletes it. Reserved keys (__API__, \
            __created_at) are system-owned and cannot be altered.",
        after_help = "\
EXAMPLES:
    # Print metadata of revision 1
    artifact-store meta -r 1 project/a artifact1

    # Include the reserved keys
    artifact-store meta -H -r 1 project/a artifact1

    # Delete key 'a', then set 'c'
    artifact-store meta -r 1 project/a artifact1 a= c=hello"
    )]
    Meta {
        /// Include the reserved (system-owned) keys in the output
        #[arg(short = 'H', long = "hidden")]
        hidden: bool,

        /// Revision number to inspect or edit
        #[arg(short, long, value_name = "N")]
        revision: u64,

        /// Namespace of the artifact
        namespace: String,

        /// Artifact name
        artifact: String,

        /// Edits, each KEY=VALUE (set) or KEY= (delete), applied in order
        edits: Vec<String>,
    },

    /// Point a tag at a revision
    #[command(
        name = "tag",
        long_about = "Point a tag at a revision.\n\n\
            The target is selected by revision number (-r) or by following \
            another tag's current pointer (-t); exactly one selector must \
            be given. Existing tags are repointed atomically."
    )]
    Tag {
        /// Target revision number
        #[arg(short, long, value_name = "N")]
        revision: Option<u64>,

        /// Tag whose current target becomes the new tag's target
        #[arg(short = 't', long = "from-tag", value_name = "TAG")]
        from_tag: Option<String>,

        /// Namespace of the artifact
        namespace: String,

        /// Artifact name
        artifact: String,

        /// Tag name to create or repoint
        tag: String,
    },

    /// Enumerate namespaces, artifacts, revisions, or tags
    #[command(
        name = "list",
        group(ArgGroup::new("what").required(true)),
        long_about = "Enumerate namespaces, artifacts, revisions, or tags.\n\n\
            Exactly one selector is required; results print one per line, \
            sorted.",
        after_help = "\
EXAMPLES:
    artifact-store list -n                        # all namespaces
    artifact-store list -a project/a              # artifacts of a namespace
    artifact-store list -r project/a artifact1    # revisions of an artifact
    artifact-store list -t project/a artifact1    # tags of an artifact"
    )]
    List {
        /// List all namespaces containing artifacts
        #[arg(short, long, group = "what")]
        namespaces: bool,

        /// List artifacts of NAMESPACE
        #[arg(short, long, group = "what")]
        artifacts: bool,

        /// List revisions of NAMESPACE ARTIFACT
        #[arg(short, long, group = "what")]
        revisions: bool,

        /// List tags of NAMESPACE ARTIFACT
        #[arg(short, long, group = "what")]
        tags: bool,

        /// NAMESPACE and ARTIFACT, as the selector requires
        #[arg(value_name = "ARG")]
        args: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_requires_exactly_one_selector() {
        assert!(Cli::try_parse_from(["artifact-store", "list"]).is_err());
        assert!(Cli::try_parse_from(["artifact-store", "list", "-n", "-a"]).is_err());
        assert!(Cli::try_parse_from(["artifact-store", "list", "-n"]).is_ok());
    }

    #[test]
    fn store_parses_repeated_options() {
        let cli = Cli::try_parse_from([
            "artifact-store",
            "store",
            "-r",
            "1",
            "-t",
            "latest",
            "-t",
            "stable",
            "-m",
            "k=v",
            "--exclude",
            "*.o",
            "project/a",
            "artifact1",
            "/data",
        ])
        .unwrap();
        match cli.command {
            Command::Store {
                revision,
                tags,
                meta,
                exclude,
                copy,
                ..
            } => {
                assert_eq!(revision, 1);
                assert_eq!(tags, vec!["latest", "stable"]);
                assert_eq!(meta, vec!["k=v"]);
                assert_eq!(exclude, vec!["*.o"]);
                assert!(!copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_apply_to_subcommands() {
        let cli = Cli::try_parse_from([
            "artifact-store",
            "-v",
            "--root",
            "/store",
            "init",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/store")));
    }
}
