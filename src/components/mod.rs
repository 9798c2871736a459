//! Page components
//!
//! Each component is a plain, serializable view model. Composition happens
//! here in Rust; the templates only lay the pieces out.

pub mod chrome;
pub mod feed;
pub mod page;
pub mod post_page;
pub mod post_preview;

pub use chrome::{Avatar, Container, Footer, Header, Intro};
pub use feed::FeedView;
pub use page::{compose_home, Feed, HomePage};
pub use post_page::PostPage;
pub use post_preview::PostSummary;
