//! Collision-free destination paths inside the output directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Inserts `_n` before the last extension (`photo.jpg` → `photo_1.jpg`), or
/// appends it when the name has no `.` at all.
pub fn suffixed_filename(name: &str, n: u32) -> String {
    match name.rfind('.') {
        Some(idx) => format!("{}_{}{}", &name[..idx], n, &name[idx..]),
        None => format!("{}_{}", name, n),
    }
}

/// Returns `candidate` or the first `candidate` with a `_n` suffix for which
/// `is_taken` is false. Probes sequentially from 1.
pub fn unique_filename<F>(candidate: &str, mut is_taken: F) -> String
where
    F: FnMut(&str) -> bool,
{
    if !is_taken(candidate) {
        return candidate.to_string();
    }
    let mut n = 1u32;
    loop {
        let next = suffixed_filename(candidate, n);
        if !is_taken(&next) {
            return next;
        }
        n += 1;
    }
}

/// Assigns destination paths for one run.
///
/// A name counts as taken when a file of that name exists in the output
/// directory (checked on every probe) or when an earlier call in this run
/// already handed it out. Call sequentially, before any download starts.
#[derive(Debug)]
pub struct FilenameResolver {
    dir: PathBuf,
    assigned: HashSet<String>,
}

impl FilenameResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            assigned: HashSet::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves a unique destination path for `url` and reserves it.
    pub fn resolve(&mut self, url: &str) -> PathBuf {
        let candidate = super::derive_filename(url);
        let dir = &self.dir;
        let assigned = &self.assigned;
        let name = unique_filename(&candidate, |name| {
            assigned.contains(name) || dir.join(name).exists()
        });
        let path = self.dir.join(&name);
        self.assigned.insert(name);
        path
    }
}
