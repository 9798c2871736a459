//! Post model

use serde::{Deserialize, Serialize};

/// Author shown on the post detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub picture: String,
}

/// A blog post as handed out by a content provider
///
/// Records are read-only once built. The `slug` is the post's identity: it
/// keys feed items and forms the detail link, and is expected (not checked)
/// to be unique across a provider's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub title: String,

    /// Path or URL of the cover image
    pub cover_image: String,

    /// Raw date string from the source, formatted only at display time
    pub date: String,

    pub excerpt: String,

    /// URL-safe identifier
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    /// Raw markdown body
    #[serde(default, skip_serializing)]
    pub content: String,
}

impl PostRecord {
    /// Create a record with the fields the feed needs
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        excerpt: impl Into<String>,
        cover_image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            cover_image: cover_image.into(),
            date: date.into(),
            excerpt: excerpt.into(),
            slug: slug.into(),
            author: None,
            og_image: None,
            content: String::new(),
        }
    }
}
