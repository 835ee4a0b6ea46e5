//! Run-level (fatal) errors. Per-download failures never surface here; they
//! are outcomes, see [`crate::fetch::DownloadOutcome`].

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::fetch::FetchError;

pub type Result<T> = std::result::Result<T, RunError>;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("input file not found: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Fetcher(#[from] FetchError),
}

impl RunError {
    pub(crate) fn input_read(path: &Path, source: io::Error) -> Self {
        RunError::InputRead {
            path: path.to_path_buf(),
            source,
        }
    }
}
