// src/utils/url.rs

//! URL manipulation utilities.

/// Resolve an image path returned by the API for display.
///
/// Absolute (`http...`) paths pass through unchanged, empty paths stay empty,
/// everything else is prefixed with the image host.
///
/// # Examples
/// ```
/// use cms_admin::utils::url::resolve_image;
///
/// assert_eq!(
///     resolve_image("https://img.example.com", "/uploads/icon.png"),
///     "https://img.example.com/uploads/icon.png"
/// );
/// assert_eq!(
///     resolve_image("https://img.example.com", "https://cdn.example.com/a.png"),
///     "https://cdn.example.com/a.png"
/// );
/// ```
pub fn resolve_image(image_base: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() || path.starts_with("http") || image_base.is_empty() {
        return path.to_string();
    }
    join(image_base, path)
}

/// Join a base URL and a path with exactly one slash between them.
///
/// Unlike `Url::join`, the last segment of the base is never dropped, so a
/// base of `http://host/api` keeps its `/api` prefix.
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{path}")
}
