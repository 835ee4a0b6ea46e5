//! Download tasks: a URL paired with its resolved destination.

use std::path::PathBuf;

use crate::extract::Candidate;
use crate::url_model::FilenameResolver;

/// One queued download. Paths are unique within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub url: String,
    pub dest: PathBuf,
    /// Input line the URL was first seen on.
    pub line: usize,
}

/// Resolves destinations for all candidates, in order, before anything is downloaded.
pub fn plan_tasks(candidates: Vec<Candidate>, resolver: &mut FilenameResolver) -> Vec<DownloadTask> {
    candidates
        .into_iter()
        .map(|c| {
            let dest = resolver.resolve(&c.url);
            DownloadTask {
                url: c.url,
                dest,
                line: c.line,
            }
        })
        .collect()
}
