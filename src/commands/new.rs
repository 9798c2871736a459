//! Create a new post

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Create `<posts_dir>/<slug>.md` with a front-matter skeleton
///
/// The slug defaults to the slugified title.
pub fn create_post(blog: &Blog, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        bail!("Cannot derive a slug from {:?}", title);
    }

    fs::create_dir_all(&blog.posts_dir)?;

    let file_path = blog.posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let date = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let content = format!(
        r#"---
title: {title}
excerpt: ""
coverImage: "/assets/blog/{slug}/cover.jpg"
date: "{date}"
ogImage:
  url: "/assets/blog/{slug}/cover.jpg"
---

"#,
        title = serde_json::to_string(title)?,
        slug = slug,
        date = date
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentProvider;

    #[test]
    fn test_create_post_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let path = create_post(&blog, "Hello: \"World\"", None).unwrap();
        assert_eq!(path, blog.posts_dir.join("hello-world.md"));

        let posts = blog.provider().fetch_all().unwrap();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "Hello: \"World\"");
        assert_eq!(post.cover_image, "/assets/blog/hello-world/cover.jpg");
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        create_post(&blog, "Same", Some("same")).unwrap();
        assert!(create_post(&blog, "Other", Some("same")).is_err());
    }
}
