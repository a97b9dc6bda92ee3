use std::path::{Path, PathBuf};
use thiserror::Error;

/// Non-fatal failures encountered while walking a tree.
///
/// Both kinds are reported on the diagnostic sink and the walk carries on
/// with whatever partial data it has.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("{}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    LinkResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// The path this error occurred at.
    pub fn path(&self) -> &Path {
        match self {
            Self::Listing { path, .. } | Self::LinkResolution { path, .. } => path,
        }
    }
}
