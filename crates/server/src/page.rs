//! Embedded HTML viewer.
//!
//! A single static page: it lists the available fonts from
//! `/api/names/fonts` and renders `/api/names?font=<key>` client-side.

pub const INDEX_HTML: &str = include_str!("../static/index.html");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_uses_api_routes() {
        assert!(INDEX_HTML.contains("/api/names/fonts"));
        assert!(INDEX_HTML.contains("/api/names?font="));
    }
}
