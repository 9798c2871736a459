//! Content loader - the provider that hands posts to page composition

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, MarkdownRenderer, PostRecord};
use crate::helpers::parse_date;
use crate::Blog;

/// Source of post records
///
/// `fetch_all` returns every published post in display order. Callers do
/// not reorder, filter or deduplicate what it returns.
pub trait ContentProvider {
    /// Fetch every post, in display order
    fn fetch_all(&self) -> Result<Vec<PostRecord>, ContentError>;
}

/// Already-loaded posts, returned as given
impl ContentProvider for [PostRecord] {
    fn fetch_all(&self) -> Result<Vec<PostRecord>, ContentError> {
        Ok(self.to_vec())
    }
}

impl ContentProvider for Vec<PostRecord> {
    fn fetch_all(&self) -> Result<Vec<PostRecord>, ContentError> {
        self.as_slice().fetch_all()
    }
}

/// Loads posts from a directory of markdown files
///
/// Each `<slug>.md` directly inside the directory is one post. Posts come
/// back newest first.
pub struct FileContentProvider {
    posts_dir: PathBuf,
}

impl FileContentProvider {
    /// Create a provider reading from `posts_dir`
    pub fn new<P: Into<PathBuf>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    /// Create a provider for a blog's configured posts directory
    pub fn for_blog(blog: &Blog) -> Self {
        Self::new(blog.posts_dir.clone())
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<PostRecord, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) = FrontMatter::parse(&raw).map_err(|e| ContentError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // The file name is the slug, not the title
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let title = fm.title.ok_or_else(|| ContentError::MissingField {
            path: path.to_path_buf(),
            field: "title",
        })?;
        let date = fm.date.ok_or_else(|| ContentError::MissingField {
            path: path.to_path_buf(),
            field: "date",
        })?;

        let (marked_excerpt, content) = MarkdownRenderer::split_excerpt(body);
        let excerpt = fm.excerpt.or(marked_excerpt).unwrap_or_default();

        if slug::slugify(&slug) != slug {
            tracing::warn!("Slug {:?} from {:?} is not URL-safe", slug, path);
        }

        let mut post = PostRecord::new(
            slug,
            title,
            date,
            excerpt,
            fm.cover_image.unwrap_or_default(),
        );
        post.author = fm.author;
        post.og_image = fm.og_image.map(|og| og.url);
        post.content = content;

        Ok(post)
    }
}

impl ContentProvider for FileContentProvider {
    fn fetch_all(&self) -> Result<Vec<PostRecord>, ContentError> {
        if !self.posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", self.posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ContentError::Io {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.posts_dir.clone()),
                source: e.into(),
            })?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                posts.push(self.load_post(path)?);
            }
        }

        // Newest first by parsed date; unparseable dates sort last, by raw text
        posts.sort_by_cached_key(|p| Reverse((parse_date(&p.date), p.date.clone())));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_post(dir: &Path, slug: &str, title: &str, date: &str) {
        let content = format!(
            "---\ntitle: \"{}\"\ndate: \"{}\"\ncoverImage: \"/assets/blog/{}/cover.jpg\"\nexcerpt: \"About {}\"\n---\n\nBody of {}.\n",
            title, date, slug, title, title
        );
        fs::write(dir.join(format!("{}.md", slug)), content).unwrap();
    }

    #[test]
    fn test_fetch_all_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "older", "Older", "2023-05-01T00:00:00.000Z");
        write_post(dir.path(), "newer", "Newer", "2024-01-01T00:00:00.000Z");
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let provider = FileContentProvider::new(dir.path());
        let posts = provider.fetch_all().unwrap();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
        assert_eq!(posts[0].title, "Newer");
        assert_eq!(posts[0].cover_image, "/assets/blog/newer/cover.jpg");
        assert_eq!(posts[0].excerpt, "About Newer");
        assert!(posts[0].content.contains("Body of Newer."));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileContentProvider::new(dir.path().join("_posts"));
        assert!(provider.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_excerpt_from_more_marker() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("marked.md"),
            "---\ntitle: Marked\ndate: 2024-02-02\n---\nShort intro.\n<!-- more -->\nThe rest.\n",
        )
        .unwrap();

        let posts = FileContentProvider::new(dir.path()).fetch_all().unwrap();
        let post = &posts[0];
        assert_eq!(post.excerpt, "Short intro.");
        assert_eq!(post.cover_image, "");
        assert!(post.content.contains("The rest."));
    }

    #[test]
    fn test_missing_title_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "good", "Good", "2024-01-01");
        fs::write(dir.path().join("bad.md"), "---\ndate: 2024-01-01\n---\nBody\n").unwrap();

        let err = FileContentProvider::new(dir.path()).fetch_all().unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingField { field: "title", .. }
        ));
    }

    #[test]
    fn test_fetch_all_orders_mixed_date_formats() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "iso", "Iso", "2024-01-01T00:00:00.000Z");
        write_post(dir.path(), "slashed", "Slashed", "2024/01/02");
        write_post(dir.path(), "spaced", "Spaced", "2024-01-01 10:00");
        write_post(dir.path(), "oldest", "Oldest", "2023-12-31");
        write_post(dir.path(), "someday", "Someday", "not a date");

        let posts = FileContentProvider::new(dir.path()).fetch_all().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["slashed", "spaced", "iso", "oldest", "someday"]);
    }

    #[test]
    fn test_vec_provider_returns_input_order() {
        let posts = vec![
            PostRecord::new("b", "B", "2020-01-01", "", ""),
            PostRecord::new("a", "A", "2024-01-01", "", ""),
        ];
        let fetched = posts.fetch_all().unwrap();
        assert_eq!(fetched, posts);
    }
}
