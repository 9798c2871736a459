//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Site
title: Tim Gu's Blog
description: A place where I rant. A lot
language: en
url: http://localhost:3000

# Directory
posts_dir: _posts
assets_dir: public
public_dir: out

# Writing
highlight_theme: base16-ocean.dark
line_numbers: false
"#;

const HELLO_WORLD: &str = r#"---
title: "Hello World"
excerpt: "The first post on this blog."
coverImage: "/assets/blog/hello-world/cover.jpg"
date: "2024-01-01T00:00:00.000Z"
ogImage:
  url: "/assets/blog/hello-world/cover.jpg"
---

Welcome! Edit or delete this post, then run `blogs-rs generate`.
"#;

/// Initialize a new blog in the given directory
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("_posts"))?;
    fs::create_dir_all(target_dir.join("public/assets/blog/avatar"))?;
    fs::create_dir_all(target_dir.join("public/assets/blog/hello-world"))?;

    write_if_missing(&target_dir.join(crate::CONFIG_FILE), DEFAULT_CONFIG)?;
    write_if_missing(&target_dir.join("_posts/hello-world.md"), HELLO_WORLD)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::debug!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentProvider;
    use crate::Blog;

    #[test]
    fn test_init_site_is_usable() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.public_dir, "out");
        let posts = blog.provider().fetch_all().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-world");
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(crate::CONFIG_FILE), "title: Mine\n").unwrap();
        init_site(dir.path()).unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "Mine");
    }
}
