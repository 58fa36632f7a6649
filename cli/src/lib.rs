use std::{fs, io::Write, path::Path};

use arbor_tree::{
    fixtures::{FIRST_DIRECTORY, FIRST_FILE},
    Manifest, Node,
};
use tracing::{debug, instrument};

pub mod args;
mod errors;

pub use args::Args;
pub use errors::Error;

/// The trees listed when no manifest is given: a lone file, and a directory
/// holding two files and an empty directory.
pub fn sample_trees() -> Vec<Node> {
    vec![FIRST_FILE.clone(), FIRST_DIRECTORY.clone()]
}

/// Reads a JSON [Manifest] from `path` and builds the tree it describes.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_manifest(path: &Path) -> Result<Node, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;

    let manifest: Manifest = serde_json::from_str(&contents).map_err(|source| Error::Parse {
        path: path.to_owned(),
        source,
    })?;

    let node = Node::from(manifest);
    debug!(nodes = node.node_count(), "loaded manifest");
    Ok(node)
}

/// Writes the listing of each tree to `w`, one line per entry.
pub fn write_listing(w: &mut impl Write, trees: &[Node], marker: &str) -> Result<(), Error> {
    for tree in trees {
        for line in tree.list_with_marker(marker) {
            writeln!(w, "{}", line)?;
        }
    }
    Ok(())
}

/// Lists the trees selected by `args` into `w`.
pub fn run(args: &Args, w: &mut impl Write) -> Result<(), Error> {
    let trees = match &args.manifest {
        Some(path) => vec![load_manifest(path)?],
        None => sample_trees(),
    };

    write_listing(w, &trees, &args.empty_marker)?;
    w.flush()?;
    Ok(())
}
