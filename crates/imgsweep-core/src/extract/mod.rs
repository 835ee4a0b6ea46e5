//! Image URL discovery over delimited text records.
//!
//! Splits each record on the configured delimiter, keeps fields (or, failing
//! that, whitespace-separated words of a field) that look like JPEG links,
//! normalizes them and drops repeats. First-seen order is kept so
//! the download queue follows the input file.

mod normalize;

pub use normalize::{has_http_scheme, normalize_field};

use std::collections::HashSet;

/// A unique image URL and the 1-based input line it first appeared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub line: usize,
}

/// Result of scanning a whole record source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Unique candidates in first-seen order.
    pub candidates: Vec<Candidate>,
    /// Total records read, blank ones included.
    pub lines: usize,
}

/// Incremental extractor; feed records with [`UrlExtractor::scan_record`].
#[derive(Debug)]
pub struct UrlExtractor {
    delimiter: char,
    seen: HashSet<String>,
    candidates: Vec<Candidate>,
    lines: usize,
}

impl UrlExtractor {
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            seen: HashSet::new(),
            candidates: Vec::new(),
            lines: 0,
        }
    }

    /// Scans one record. Returns how many new URLs it contributed.
    pub fn scan_record(&mut self, record: &str) -> usize {
        self.lines += 1;
        if record.trim().is_empty() {
            return 0;
        }

        let mut added = 0;
        for field in record.split(self.delimiter) {
            if let Some(url) = normalize_field(field) {
                added += usize::from(self.insert(url));
                continue;
            }
            // Free-text fields ("photo: https://...jpg") are searched word by word.
            for word in field.split_whitespace() {
                if let Some(url) = normalize_field(word) {
                    added += usize::from(self.insert(url));
                }
            }
        }
        added
    }

    fn insert(&mut self, url: String) -> bool {
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.candidates.push(Candidate {
            url,
            line: self.lines,
        });
        true
    }

    /// Number of unique URLs found so far.
    pub fn found(&self) -> usize {
        self.candidates.len()
    }

    pub fn finish(self) -> Extraction {
        Extraction {
            candidates: self.candidates,
            lines: self.lines,
        }
    }
}

/// Scans every record in `records` and returns the unique candidates.
pub fn extract_candidates<I, S>(records: I, delimiter: char) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = UrlExtractor::new(delimiter);
    for record in records {
        extractor.scan_record(record.as_ref());
    }
    extractor.finish()
}
