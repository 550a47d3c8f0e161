// src/page/resolve.rs
// =============================================================================
// Turns an href found on a page into an absolute URL.
//
// Links are always resolved against the page they were found on, the way a
// browser does it: "../about" on https://example.com/news/today means
// https://example.com/about.
//
// This never fails. If the base page URL itself does not parse, or the href
// cannot be joined, the href is handed back unchanged. The fetcher will then
// fail on it and that failure is reported like any other page error.
// =============================================================================

use url::Url;

/// Resolves `href` against `base` following standard URL joining rules
/// (scheme and host inheritance, `.`/`..` segments, query and fragment).
pub fn resolve(base: &str, href: &str) -> String {
    let href = href.trim();

    match Url::parse(base).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Puts an absolute URL in the same form `resolve` produces, so the start
/// URL and links pointing back at it compare equal in the visited set.
pub fn normalize(url: &str) -> String {
    let url = url.trim();

    match Url::parse(url) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_link() {
        assert_eq!(
            resolve("https://example.com/page", "https://other.com"),
            "https://other.com/"
        );
    }

    #[test]
    fn test_resolve_root_relative_link() {
        assert_eq!(
            resolve("https://example.com/news/today", "/docs"),
            "https://example.com/docs"
        );
    }

    #[test]
    fn test_resolve_dot_segments() {
        assert_eq!(
            resolve("https://example.com/news/world/today", "../sport/./latest"),
            "https://example.com/news/sport/latest"
        );
    }

    #[test]
    fn test_resolve_against_current_page_directory() {
        assert_eq!(
            resolve("https://example.com/news/", "story.html"),
            "https://example.com/news/story.html"
        );
    }

    #[test]
    fn test_resolve_query_and_fragment() {
        assert_eq!(
            resolve("https://example.com/a?x=1", "?page=2"),
            "https://example.com/a?page=2"
        );
        assert_eq!(
            resolve("https://example.com/a?x=1", "#top"),
            "https://example.com/a?x=1#top"
        );
    }

    #[test]
    fn test_resolve_protocol_relative_link() {
        assert_eq!(
            resolve("https://example.com/a", "//cdn.example.org/lib"),
            "https://cdn.example.org/lib"
        );
    }

    #[test]
    fn test_normalize_matches_resolved_links() {
        assert_eq!(normalize("https://example.com"), "https://example.com/");
        assert_eq!(normalize("HTTPS://Example.COM/a"), "https://example.com/a");
        assert_eq!(normalize("https://example.com"), resolve("https://example.com", "/"));
        assert_eq!(normalize("not a url"), "not a url");
    }

    #[test]
    fn test_unparseable_base_returns_href() {
        assert_eq!(resolve("not a url", "/docs"), "/docs");
    }

    #[test]
    fn test_other_schemes_pass_through() {
        assert_eq!(
            resolve("https://example.com", "mailto:news@example.com"),
            "mailto:news@example.com"
        );
    }
}
