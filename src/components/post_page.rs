//! Post detail page, served at `/posts/<slug>`

use anyhow::Result;
use serde::Serialize;

use super::chrome::{AUTHOR_NAME, AVATAR_PICTURE};
use super::{Footer, Header};
use crate::content::{Author, MarkdownRenderer, PostRecord};
use crate::helpers::{cover_image, full_url_for, open_graph, post_href, time_tag};

/// The composed detail page of one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPage {
    pub header: Header,
    pub slug: String,
    pub title: String,
    pub author: Author,
    pub cover_html: String,
    pub date_html: String,
    pub body_html: String,
    pub meta_html: String,
    pub footer: Footer,
}

impl PostPage {
    /// Compose from a loaded post, rendering its markdown body
    pub fn from_record(
        post: &PostRecord,
        renderer: &MarkdownRenderer,
        site_url: &str,
    ) -> Result<Self> {
        let author = post.author.clone().unwrap_or_else(|| Author {
            name: AUTHOR_NAME.to_string(),
            picture: AVATAR_PICTURE.to_string(),
        });

        let og_image = post
            .og_image
            .as_deref()
            .or(Some(post.cover_image.as_str()))
            .filter(|img| !img.is_empty())
            .map(|img| full_url_for(site_url, img));

        Ok(Self {
            header: Header::default(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            author,
            // Already on the post page, so the cover is not a link
            cover_html: cover_image("", &post.title, &post.cover_image),
            date_html: time_tag(&post.date),
            body_html: renderer.render(&post.content)?,
            meta_html: open_graph(
                &post.title,
                &post.excerpt,
                &full_url_for(site_url, &post_href(&post.slug)),
                og_image.as_deref(),
            ),
            footer: Footer::default(),
        })
    }
}
