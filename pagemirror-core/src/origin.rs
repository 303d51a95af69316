//! Same-origin classification of discovered resource references.

use url::Url;

/// Decide whether a resource reference belongs to the page's own origin.
///
/// The reference is joined against the page URL and the resulting hostnames
/// are compared (port ignored). Bare paths such as `/assets/a.css` or
/// `a.css` inherit the page host through joining and are always local.
/// A scheme-relative reference (`//cdn.example.com/a.js`) resolves to its
/// own host and is classified by it. References that cannot be joined are
/// treated as external.
pub fn is_local(resource_url: &str, page_url: &str) -> bool {
    let Ok(page) = Url::parse(page_url) else {
        return false;
    };

    match page.join(resource_url) {
        Ok(resolved) => resolved.host_str() == page.host_str(),
        Err(_) => false,
    }
}
