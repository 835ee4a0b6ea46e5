//! Filename extraction from URL path.

/// Extracts the last path segment of `url` as written, for use as a filename hint.
///
/// Works on the raw text so characters are never percent-encoded on the way:
/// the query and fragment are cut at the first `?` or `#`, trailing `/` are
/// ignored, and the text after the last remaining `/` is returned. Returns
/// `None` when that segment is empty, `.` or `..`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    let path = url[..end].trim_end_matches('/');
    let segment = path.rsplit('/').next().unwrap_or(path);
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
