//! Helpers around the page location.
//!
//! The sales data is served by the same static host as the application,
//! so requests use paths relative to the current origin.

/// Query string of the current page, including the leading `?`.
///
/// Returns an empty string outside the browser.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Origin of the current page, e.g. "http://localhost:8080".
pub fn location_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Resolve a data path against the current origin.
///
/// Absolute URLs are returned unchanged.
///
/// # Example
/// ```ignore
/// let url = resolve_url("http://localhost:8080", "/mock-data/sales-data.json");
/// assert_eq!(url, "http://localhost:8080/mock-data/sales-data.json");
/// ```
pub fn resolve_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || origin.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", origin.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("http://localhost:8080/", "/mock-data/sales-data.json"),
            "http://localhost:8080/mock-data/sales-data.json"
        );
        assert_eq!(
            resolve_url("http://localhost:8080", "data.json"),
            "http://localhost:8080/data.json"
        );
        assert_eq!(
            resolve_url("http://localhost:8080", "https://cdn.example.com/x.json"),
            "https://cdn.example.com/x.json"
        );
        assert_eq!(resolve_url("", "/x.json"), "/x.json");
    }
}
