use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a run. Per-file misses are reported through
/// [`crate::planner::Plan::Exhausted`] instead.
#[derive(Error, Debug)]
pub enum ScrambleError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not check whether {} exists: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write mapping file {}: {source}", path.display())]
    WriteMap {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not serialize mapping: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrambleError>;
