//! Root-relative URL resolution.
//!
//! Pages live at different depths (`index.html`, `pages/picks.html`), so each
//! page knows its root path (`.` or `..`) and every site-internal URL is
//! joined onto it. Absolute `http(s)` URLs pass through untouched.

/// Join a site-relative path onto a page's root path.
///
/// # Examples
///
/// ```
/// use notedown::site::join_path;
///
/// assert_eq!(join_path(".", "data/picks.json"), "./data/picks.json");
/// assert_eq!(join_path("../", "/images/a.png"), "../images/a.png");
/// assert_eq!(join_path("/blog", "./post.html"), "/blog/post.html");
/// ```
pub fn join_path(root_path: &str, relative_path: &str) -> String {
    let root = root_path.strip_suffix('/').unwrap_or(root_path);
    let relative = relative_path.strip_prefix("./").unwrap_or(relative_path);
    let relative = relative.strip_prefix('/').unwrap_or(relative);

    match root {
        "." | "" => format!("./{relative}"),
        ".." => format!("../{relative}"),
        _ => format!("{root}/{relative}"),
    }
}

/// Whether `url` is an absolute `http://` or `https://` URL (any case).
pub fn is_external(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolve an image or other asset path; empty stays empty.
pub fn resolve_asset_path(root_path: &str, asset: &str) -> String {
    if asset.is_empty() {
        return String::new();
    }
    if is_external(asset) {
        return asset.to_string();
    }
    join_path(root_path, asset)
}

/// Resolve a link target; an empty URL becomes `#`.
pub fn resolve_internal_url(root_path: &str, url: &str) -> String {
    if url.is_empty() {
        return "#".to_string();
    }
    if is_external(url) {
        return url.to_string();
    }
    join_path(root_path, url)
}

/// Site-relative path of a JSON index under `data/`.
pub fn data_path(file_name: &str) -> String {
    format!("data/{file_name}")
}

/// URL of a JSON index under `data/`, as seen from a page.
pub fn resolve_data_path(root_path: &str, file_name: &str) -> String {
    resolve_internal_url(root_path, &data_path(file_name))
}
