//! Field-level candidate detection and URL normalization.

/// Substring a field must contain (case-insensitive) to count as an image link.
const IMAGE_MARKER: &str = ".jpg";

/// Returns the normalized URL if `field` looks like a JPEG link, else `None`.
///
/// The field is trimmed and stripped of every `"` before matching. A match
/// needs `.jpg` somewhere and an `http` or `www` prefix (case-insensitive).
/// `www.` links gain an `https://` prefix. Fields that pass the prefix test
/// but still lack an `http://`/`https://` scheme (`wwwsite/...`, `httpfoo`)
/// are rejected, so every returned URL carries a scheme.
pub fn normalize_field(field: &str) -> Option<String> {
    let value: String = field.trim().chars().filter(|&c| c != '"').collect();
    let lower = value.to_lowercase();

    if !lower.contains(IMAGE_MARKER) {
        return None;
    }
    if !(lower.starts_with("http") || lower.starts_with("www")) {
        return None;
    }

    let url = if lower.starts_with("www.") {
        format!("https://{}", value)
    } else {
        value
    };

    has_http_scheme(&url).then_some(url)
}

/// True when `url` starts with `http://` or `https://` (ASCII case-insensitive).
pub fn has_http_scheme(url: &str) -> bool {
    let starts = |prefix: &str| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts("http://") || starts("https://")
}
