//! List posts

use anyhow::Result;
use std::collections::HashMap;

use crate::content::{ContentProvider, PostRecord};
use crate::Blog;

/// Print every post in display order
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let posts = blog.provider().fetch_all()?;

    for slug in duplicate_slugs(&posts) {
        tracing::warn!("Slug {:?} is used by more than one post", slug);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {} - {} [{}]", post.date, post.title, post.slug);
    }

    Ok(())
}

/// Slugs that appear more than once, in order of first appearance
pub fn duplicate_slugs(posts: &[PostRecord]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        *counts.entry(post.slug.as_str()).or_insert(0) += 1;
    }

    let mut duplicates = Vec::new();
    for post in posts {
        if counts.get(post.slug.as_str()).copied().unwrap_or(0) > 1
            && !duplicates.contains(&post.slug.as_str())
        {
            duplicates.push(post.slug.as_str());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_slugs() {
        let posts = vec![
            PostRecord::new("b", "B1", "2024-01-03", "", ""),
            PostRecord::new("a", "A", "2024-01-02", "", ""),
            PostRecord::new("b", "B2", "2024-01-01", "", ""),
        ];
        assert_eq!(duplicate_slugs(&posts), vec!["b"]);
        assert!(duplicate_slugs(&posts[..2]).is_empty());
    }
}
