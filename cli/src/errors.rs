use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read manifest {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unable to write listing: {0}")]
    Write(#[from] io::Error),
}
