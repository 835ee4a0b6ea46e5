//! Recognizing links that point at a gallery page rather than an image file.

use std::fmt;

/// Skip reason reported for URLs matched by a [`PagePredicate`].
pub const NOT_DIRECT_IMAGE: &str = "not a direct image link";

/// Decides whether a URL is a human-readable page instead of a raw file.
/// Matching URLs are skipped without any network request.
pub trait PagePredicate: Send + Sync + fmt::Debug {
    fn is_page(&self, url: &str) -> bool;
}

/// Matches URLs containing any of a list of host+path fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringPages {
    patterns: Vec<String>,
}

impl SubstringPages {
    /// Wikimedia Commons file description pages (`/wiki/File:...`).
    pub const WIKIMEDIA_FILE_PAGE: &'static str = "commons.wikimedia.org/wiki/File:";

    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for SubstringPages {
    fn default() -> Self {
        Self::new([Self::WIKIMEDIA_FILE_PAGE])
    }
}

impl PagePredicate for SubstringPages {
    fn is_page(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| url.contains(p.as_str()))
    }
}
