//! Live page snapshots through Chrome.
//!
//! A [`BrowserSession`] loads a page in Chrome and turns the rendered DOM
//! into a [`crate::dom::Document`], so the normalizer can be checked
//! against what the theme's JavaScript actually produced.

pub mod config;
pub mod session;

pub use config::LaunchOptions;
pub use session::BrowserSession;

use std::path::Path;

/// Turn user input into something Chrome can navigate to.
///
/// Existing local files become `file://` URLs, which is how a built site is
/// usually inspected without a server.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("file://")
        || trimmed.starts_with("data:")
        || trimmed.starts_with("about:")
        || trimmed.starts_with("chrome://")
    {
        return trimmed.to_string();
    }

    let path = Path::new(trimmed);
    if path.exists() {
        if let Ok(absolute) = path.canonicalize() {
            return format!("file://{}", absolute.display());
        }
    }

    // Local preview servers (`mkdocs serve`, the audit's static server) are plain http
    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    format!("https://{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_keeps_schemes() {
        assert_eq!(normalize_url("https://example.com/docs/"), "https://example.com/docs/");
        assert_eq!(normalize_url("  http://localhost:8080 "), "http://localhost:8080");
        assert_eq!(normalize_url("data:text/html,<p>hi</p>"), "data:text/html,<p>hi</p>");
    }

    #[test]
    fn test_normalize_url_localhost() {
        assert_eq!(normalize_url("localhost:8000"), "http://localhost:8000");
        assert_eq!(normalize_url("127.0.0.1:8080/guide/"), "http://127.0.0.1:8080/guide/");
    }

    #[test]
    fn test_normalize_url_domain() {
        assert_eq!(normalize_url("docs.example.org"), "https://docs.example.org");
    }

    #[test]
    fn test_normalize_url_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        std::fs::write(&page, "<html></html>").unwrap();

        let url = normalize_url(page.to_str().unwrap());
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("index.html"));
    }
}
