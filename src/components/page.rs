//! Home page composition

use serde::Serialize;

use super::{FeedView, Footer, Intro};
use crate::content::{ContentError, ContentProvider, PostRecord};

/// What goes in the feed slot of the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// No posts: the slot is left out entirely
    Empty,
    Populated(FeedView),
}

impl Feed {
    /// The feed view, when there is one
    pub fn view(&self) -> Option<&FeedView> {
        match self {
            Feed::Empty => None,
            Feed::Populated(view) => Some(view),
        }
    }
}

/// The composed home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub intro: Intro,
    #[serde(skip)]
    pub feed: Feed,
    pub footer: Footer,
}

impl HomePage {
    /// Compose from posts that are already loaded
    pub fn from_posts(posts: &[PostRecord]) -> Self {
        let feed = if posts.is_empty() {
            Feed::Empty
        } else {
            Feed::Populated(FeedView::new(posts))
        };

        Self {
            intro: Intro::default(),
            feed,
            footer: Footer::default(),
        }
    }
}

/// Fetch every post once and compose the home page
///
/// Provider failures are returned as-is.
pub fn compose_home<P>(provider: &P) -> Result<HomePage, ContentError>
where
    P: ContentProvider + ?Sized,
{
    let posts = provider.fetch_all()?;
    tracing::debug!("Composing home page from {} posts", posts.len());
    Ok(HomePage::from_posts(&posts))
}
