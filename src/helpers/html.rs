//! HTML helper functions

use super::url::{encode_asset_path, post_href};

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: &str, class: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="{}">"#,
        escape_html(&encode_asset_path(src)),
        escape_html(alt),
        class
    )
}

/// Render a post cover image
///
/// The image links to the post when a slug is given. An empty `src`
/// renders nothing.
///
/// # Examples
/// ```ignore
/// cover_image("a", "Post A", "/a.png")
/// // -> <a href="/posts/a" aria-label="Post A"><img src="/a.png" alt="Cover Image for Post A" ...></a>
/// ```
pub fn cover_image(slug: &str, title: &str, src: &str) -> String {
    if src.trim().is_empty() {
        return String::new();
    }

    let class = if slug.is_empty() {
        "shadow-sm w-full"
    } else {
        "shadow-sm w-full hover:shadow-lg transition-shadow duration-200"
    };
    let image = image_tag(src, &format!("Cover Image for {}", title), class);

    if slug.is_empty() {
        format!(r#"<div class="sm:mx-0">{}</div>"#, image)
    } else {
        format!(
            r#"<div class="sm:mx-0"><a href="{}" aria-label="{}">{}</a></div>"#,
            escape_html(&post_href(slug)),
            escape_html(title),
            image
        )
    }
}

/// Generate Open Graph meta tags
pub fn open_graph(title: &str, description: &str, url: &str, image: Option<&str>) -> String {
    let mut tags = vec![
        r#"<meta property="og:type" content="article">"#.to_string(),
        format!(
            r#"<meta property="og:title" content="{}">"#,
            escape_html(title)
        ),
        format!(r#"<meta property="og:url" content="{}">"#, escape_html(url)),
    ];

    if !description.is_empty() {
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            escape_html(description)
        ));
    }

    if let Some(img) = image.filter(|i| !i.is_empty()) {
        tags.push(format!(
            r#"<meta property="og:image" content="{}">"#,
            escape_html(img)
        ));
    }

    tags.join("\n")
}
