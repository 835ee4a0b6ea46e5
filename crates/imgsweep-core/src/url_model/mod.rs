//! URL modeling and filename derivation.
//!
//! Derives safe local filenames from the last segment of an image URL and
//! resolves collisions against the output directory.

mod path;
mod sanitize;
mod unique;

pub use path::filename_from_url_path;
pub use sanitize::{sanitize_filename, MAX_NAME_CHARS};
pub use unique::{suffixed_filename, unique_filename, FilenameResolver};

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "image.jpg";

/// Derives a safe filename for saving `url` (no collision handling).
///
/// # Examples
///
/// - `derive_filename("https://example.com/photo.jpg?w=1")` → `"photo.jpg"`
/// - `derive_filename("https://example.com/a b.jpg")` → `"a_b.jpg"`
pub fn derive_filename(url: &str) -> String {
    let raw = filename_from_url_path(url).unwrap_or_default();
    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
