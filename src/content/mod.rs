//! Content module - post records and the provider that loads them

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use error::ContentError;
pub use frontmatter::{FrontMatter, OgImage};
pub use loader::{ContentProvider, FileContentProvider};
pub use markdown::MarkdownRenderer;
pub use post::{Author, PostRecord};
