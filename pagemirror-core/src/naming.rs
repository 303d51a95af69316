//! Filesystem-safe names derived from URLs.
//!
//! A page saved from `https://ru.hexlet.io/courses` becomes
//! `ru-hexlet-io-courses.html`, with its assets under
//! `ru-hexlet-io-courses_files/`.

use std::path::Path;
use url::Url;

/// Turn a URL (or host+path fragment) into a flat file name.
///
/// Strips a leading `http://`/`https://` scheme, collapses every run of
/// characters outside `[A-Za-z0-9]` into a single `-`, trims dashes at both
/// ends and appends `extension` (`.html` when absent).
pub fn derive_name(input: &str, extension: Option<&str>) -> String {
    let without_scheme = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input);

    let mut slug = String::with_capacity(without_scheme.len());
    for c in without_scheme.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }

    format!("{}{}", slug, extension.unwrap_or(".html"))
}

/// File name for the page itself.
pub fn page_file_name(page_url: &str) -> String {
    derive_name(page_url, None)
}

/// Directory name for the page's assets: the page base name plus `_files`.
pub fn asset_dir_name(page_url: &str) -> String {
    let file_name = page_file_name(page_url);
    let base = file_name.strip_suffix(".html").unwrap_or(&file_name);
    format!("{}_files", base)
}

/// File name for a downloaded resource.
///
/// The extension is split off the URL path first, the query string (if any)
/// is appended to the extension-less host+path, and the whole string goes
/// through [`derive_name`] with the original extension re-appended. A path
/// with no extension defaults to `.html`.
///
/// Distinct URLs can still collapse onto one name; the later download in
/// document order overwrites the earlier one. Callers needing guaranteed
/// uniqueness must disambiguate the name themselves.
pub fn resource_file_name(resource_url: &Url) -> String {
    let path = resource_url.path();

    let extension = Path::new(path).extension().and_then(|e| e.to_str());
    let trimmed_path = match extension {
        Some(ext) => &path[..path.len() - ext.len() - 1],
        None => path,
    };

    let mut source = String::from(resource_url.host_str().unwrap_or_default());
    if let Some(port) = resource_url.port() {
        source.push(':');
        source.push_str(&port.to_string());
    }
    source.push_str(trimmed_path);
    if let Some(query) = resource_url.query() {
        source.push('?');
        source.push_str(query);
    }

    match extension {
        Some(ext) => derive_name(&source, Some(&format!(".{}", ext))),
        None => derive_name(&source, None),
    }
}
