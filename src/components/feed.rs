//! Feed view: the ordered list of post summaries

use serde::Serialize;

use super::PostSummary;
use crate::content::PostRecord;

/// One summary per post, in the order the posts were given
///
/// No sorting, filtering or slug deduplication happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedView {
    pub items: Vec<PostSummary>,
}

impl FeedView {
    pub fn new(posts: &[PostRecord]) -> Self {
        Self {
            items: posts.iter().map(PostSummary::from_record).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
