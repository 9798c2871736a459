//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Route prefix every post detail page lives under
pub const POST_ROUTE_PREFIX: &str = "/posts/";

/// Characters escaped in asset paths; `/` and `:` stay intact
const ASSET_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Link target of a post detail page
///
/// # Examples
/// ```ignore
/// post_href("hello-world") // -> "/posts/hello-world"
/// ```
pub fn post_href(slug: &str) -> String {
    format!("{}{}", POST_ROUTE_PREFIX, slug)
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com/", "/posts/a") // -> "https://example.com/posts/a"
/// ```
pub fn full_url_for(base: &str, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Encode an asset path (cover image, avatar) for use in an attribute
pub fn encode_asset_path(path: &str) -> String {
    utf8_percent_encode(path, ASSET_PATH).to_string()
}

/// Whether a link points off-site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
