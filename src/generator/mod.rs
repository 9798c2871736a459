//! Generator module - writes the rendered pages to the public directory

use anyhow::{bail, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::components::{compose_home, PostPage};
use crate::content::{ContentProvider, MarkdownRenderer, PostRecord};
use crate::helpers::POST_ROUTE_PREFIX;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// What a generation run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub posts: usize,
    pub assets: usize,
}

/// Static page generator
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::with_options(
                &blog.config.highlight_theme,
                blog.config.line_numbers,
            ),
        })
    }

    /// Generate the entire site from one snapshot of the provider
    ///
    /// Every page is rendered in memory first, so a bad post fails the run
    /// before anything in the public directory changes.
    pub fn generate<P>(&self, provider: &P) -> Result<GenerateSummary>
    where
        P: ContentProvider + ?Sized,
    {
        let posts = provider.fetch_all()?;

        let mut pages = vec![(
            self.blog.public_dir.join("index.html"),
            self.render_index(&posts)?,
        )];
        pages.extend(self.render_post_pages(&posts)?);

        fs::create_dir_all(&self.blog.public_dir)?;

        // Pages of deleted or renamed posts must not outlive them
        let posts_root = self.posts_root();
        if posts_root.exists() {
            fs::remove_dir_all(&posts_root)
                .map_err(|e| anyhow::anyhow!("Failed to clear {:?}: {}", posts_root, e))?;
        }

        let assets = self.copy_assets()?;

        for (output_path, html) in &pages {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
            }
            fs::write(output_path, html)
                .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
            tracing::debug!("Generated: {:?}", output_path);
        }

        Ok(GenerateSummary {
            posts: posts.len(),
            assets,
        })
    }

    /// Render the home page
    fn render_index(&self, posts: &[PostRecord]) -> Result<String> {
        let page = compose_home(posts)?;
        self.renderer.render_home(&self.blog.config, &page)
    }

    /// Render one detail page per post, paired with its output path
    fn render_post_pages(&self, posts: &[PostRecord]) -> Result<Vec<(PathBuf, String)>> {
        let mut seen = HashSet::new();
        let mut pages = Vec::with_capacity(posts.len());

        for post in posts {
            let output_path = self.post_output_path(&post.slug)?;

            if !seen.insert(post.slug.as_str()) {
                tracing::warn!(
                    "Duplicate slug {:?}: detail page is overwritten by {:?}",
                    post.slug,
                    post.title
                );
            }

            let page = PostPage::from_record(post, &self.markdown, &self.blog.config.url)?;
            let html = self.renderer.render_post(&self.blog.config, &page)?;
            pages.push((output_path, html));
        }

        Ok(pages)
    }

    /// Directory holding every `/posts/<slug>` page
    fn posts_root(&self) -> PathBuf {
        self.blog
            .public_dir
            .join(POST_ROUTE_PREFIX.trim_matches('/'))
    }

    /// Output file backing the `/posts/<slug>` route
    fn post_output_path(&self, slug: &str) -> Result<PathBuf> {
        let mut components = Path::new(slug).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => bail!("Slug {:?} cannot be used as a route segment", slug),
        }

        Ok(self.posts_root().join(slug).join("index.html"))
    }

    /// Copy static assets (images, favicons, css) to the public directory
    fn copy_assets(&self) -> Result<usize> {
        let assets_dir = &self.blog.assets_dir;
        if !assets_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(assets_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(assets_dir)?;
            let dest = self.blog.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} assets from {:?}", copied, assets_dir);
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_in(dir: &Path) -> Blog {
        Blog::new(dir).unwrap()
    }

    #[test]
    fn test_generate_writes_index_and_posts() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        fs::create_dir_all(blog.assets_dir.join("assets/blog/a")).unwrap();
        fs::write(blog.assets_dir.join("assets/blog/a/cover.jpg"), b"jpg").unwrap();

        let posts = vec![
            PostRecord::new("a", "Post A", "2024-01-01", "...", "/assets/blog/a/cover.jpg"),
            PostRecord::new("b", "Post B", "2023-01-01", "...", ""),
        ];
        let summary = Generator::new(&blog).unwrap().generate(&posts).unwrap();
        assert_eq!(summary, GenerateSummary { posts: 2, assets: 1 });

        let index = fs::read_to_string(blog.public_dir.join("index.html")).unwrap();
        assert!(index.contains(r#"href="/posts/a""#));
        assert!(index.contains(r#"href="/posts/b""#));
        assert!(blog.public_dir.join("posts/a/index.html").is_file());
        assert!(blog.public_dir.join("posts/b/index.html").is_file());
        assert!(blog.public_dir.join("assets/blog/a/cover.jpg").is_file());
    }

    #[test]
    fn test_generate_without_posts() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let summary = Generator::new(&blog)
            .unwrap()
            .generate(&Vec::<PostRecord>::new())
            .unwrap();
        assert_eq!(summary.posts, 0);

        let index = fs::read_to_string(blog.public_dir.join("index.html")).unwrap();
        assert!(!index.contains(r#"id="stories""#));
        assert!(!blog.public_dir.join("posts").exists());
    }

    #[test]
    fn test_rejects_slug_that_escapes_route() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        fs::create_dir_all(&blog.assets_dir).unwrap();
        fs::write(blog.assets_dir.join("favicon.ico"), b"ico").unwrap();

        let posts = vec![
            PostRecord::new("good", "Good", "2024-01-02", "", ""),
            PostRecord::new("..", "Sneaky", "2024-01-01", "", ""),
        ];
        assert!(Generator::new(&blog).unwrap().generate(&posts).is_err());

        // Nothing is written when any page fails
        assert!(!blog.public_dir.join("index.html").exists());
        assert!(!blog.public_dir.join("posts/good/index.html").exists());
        assert!(!blog.public_dir.join("favicon.ico").exists());
    }

    #[test]
    fn test_failed_run_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let generator = Generator::new(&blog).unwrap();
        generator
            .generate(&vec![PostRecord::new("a", "Post A", "2024-01-01", "", "")])
            .unwrap();

        let broken = vec![PostRecord::new("a/b", "Nested", "2024-01-01", "", "")];
        assert!(generator.generate(&broken).is_err());

        let index = fs::read_to_string(blog.public_dir.join("index.html")).unwrap();
        assert!(index.contains("Post A"));
        assert!(blog.public_dir.join("posts/a/index.html").is_file());
    }

    #[test]
    fn test_regenerate_removes_stale_post_pages() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let generator = Generator::new(&blog).unwrap();

        generator
            .generate(&vec![
                PostRecord::new("kept", "Kept", "2024-01-02", "", ""),
                PostRecord::new("old-name", "Renamed", "2024-01-01", "", ""),
            ])
            .unwrap();
        assert!(blog.public_dir.join("posts/old-name/index.html").is_file());

        generator
            .generate(&vec![
                PostRecord::new("kept", "Kept", "2024-01-02", "", ""),
                PostRecord::new("new-name", "Renamed", "2024-01-01", "", ""),
            ])
            .unwrap();
        assert!(blog.public_dir.join("posts/kept/index.html").is_file());
        assert!(blog.public_dir.join("posts/new-name/index.html").is_file());
        assert!(!blog.public_dir.join("posts/old-name").exists());
    }
}
