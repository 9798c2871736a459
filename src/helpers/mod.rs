//! Helper functions shared by the page components
//!
//! Cover images, date display and link targets are rendered here so that
//! the components themselves only compose already-formatted pieces.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
