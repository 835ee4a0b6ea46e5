//! Portable filename sanitization.

/// Longest sanitized name, in characters, before any uniqueness suffix.
pub const MAX_NAME_CHARS: usize = 200;

/// Sanitizes a candidate filename.
///
/// - Replaces every character outside `[A-Za-z0-9._-]` with `_`
/// - Truncates to [`MAX_NAME_CHARS`] characters
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_CHARS)
        .collect()
}
