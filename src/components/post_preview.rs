//! Post preview: the summary block shown for each post in the feed

use serde::Serialize;

use crate::content::PostRecord;
use crate::helpers::{cover_image, post_href, time_tag};

/// Summary block for one post
///
/// Laid out in a fixed order: cover image, title link, date, excerpt.
/// `cover_html` and `date_html` are finished markup; the remaining fields
/// are plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    /// Item identity within the feed (the post slug)
    pub key: String,
    pub title: String,
    pub href: String,
    pub cover_html: String,
    pub date_html: String,
    pub excerpt: String,
}

impl PostSummary {
    pub fn from_record(post: &PostRecord) -> Self {
        Self {
            key: post.slug.clone(),
            title: post.title.clone(),
            href: post_href(&post.slug),
            cover_html: cover_image(&post.slug, &post.title, &post.cover_image),
            date_html: time_tag(&post.date),
            excerpt: post.excerpt.clone(),
        }
    }
}
