//! Segment-aware prefix and suffix helpers for request paths.
//!
//! None of these functions look at query strings or fragments; they operate on
//! a path component that has already been separated from them.

/// Returns true when `path` equals `prefix` or starts with `prefix` followed by `/`.
///
/// A partial segment never matches, so `/apidocs` does not have the prefix `/api`.
///
/// ```
/// use axum_pathinfo::has_path_prefix;
///
/// assert!(has_path_prefix("/api", "/api"));
/// assert!(has_path_prefix("/api/users", "/api"));
/// assert!(!has_path_prefix("/apidocs", "/api"));
/// ```
pub fn has_path_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Removes `prefix` from the start of `path` when [`has_path_prefix`] holds.
///
/// The result always starts with `/`; removing a prefix equal to the whole path
/// yields `/`. Paths without the prefix are returned unchanged.
pub fn remove_path_prefix(path: &str, prefix: &str) -> String {
    if !has_path_prefix(path, prefix) {
        return path.to_string();
    }

    let rest = &path[prefix.len()..];
    if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    }
}

/// Prepends `prefix` to `path`.
///
/// No-op when `path` is not absolute or `prefix` is empty.
pub fn add_path_prefix(path: &str, prefix: &str) -> String {
    if !path.starts_with('/') || prefix.is_empty() {
        return path.to_string();
    }
    format!("{prefix}{path}")
}

/// Appends `suffix` to `path`.
///
/// No-op when `path` is not absolute or `suffix` is empty.
pub fn add_path_suffix(path: &str, suffix: &str) -> String {
    if !path.starts_with('/') || suffix.is_empty() {
        return path.to_string();
    }
    format!("{path}{suffix}")
}

/// Removes a single trailing `/`. The root path stays `/`.
pub fn remove_trailing_slash(path: &str) -> String {
    match path.strip_suffix('/') {
        Some("") => "/".to_string(),
        Some(rest) => rest.to_string(),
        None => path.to_string(),
    }
}
