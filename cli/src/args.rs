use std::path::PathBuf;

use arbor_tree::EMPTY_MARKER;
use clap::Parser;
use tracing::Level;

/// Lists the contents of a tree of named resources, one line per node,
/// depth-first.
///
/// The tree is read from a JSON manifest. Without one, a small sample tree
/// is listed.
#[derive(Parser, Clone, Debug)]
pub struct Args {
    /// A global log level to use when printing logs.
    /// It's also possible to set `RUST_LOG` according to
    /// `tracing_subscriber::filter::EnvFilter`, which will always have
    /// priority.
    #[arg(long, default_value_t=Level::INFO)]
    pub log_level: Level,

    /// Path to a JSON manifest describing the tree to list
    pub manifest: Option<PathBuf>,

    /// Line printed in place of the children of an empty composite
    #[clap(long, env = "ARBOR_EMPTY_MARKER", default_value = EMPTY_MARKER)]
    pub empty_marker: String,
}
