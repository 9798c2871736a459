//! Static page chrome: avatar, header, footer, intro and container
//!
//! None of these depend on post data. The links below are fixed.

use serde::Serialize;

pub const AUTHOR_NAME: &str = "Tim Gu";
pub const AVATAR_PICTURE: &str = "/assets/blog/avatar/tim.jpeg";
pub const HOMEPAGE_URL: &str = "https://timgu.me";
pub const CONTACT_URL: &str = "https://timgu.me/#contact";

/// Author badge linking to the personal homepage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Avatar {
    pub name: &'static str,
    pub picture: &'static str,
    pub href: &'static str,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            name: AUTHOR_NAME,
            picture: AVATAR_PICTURE,
            href: HOMEPAGE_URL,
        }
    }
}

/// Site header on post pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub home_href: &'static str,
    pub label: &'static str,
    pub avatar: Avatar,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            home_href: "/",
            label: ">$ ~/Blogs",
            avatar: Avatar::default(),
        }
    }
}

/// Home page banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intro {
    pub prompt: &'static str,
    pub greeting: &'static str,
    pub avatar: Avatar,
}

impl Default for Intro {
    fn default() -> Self {
        Self {
            prompt: ">",
            greeting: "Hi👋! Welcome to my blog!",
            avatar: Avatar::default(),
        }
    }
}

/// Footer with contact links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub heading: &'static str,
    pub contact_href: &'static str,
    pub portfolio_href: &'static str,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            heading: "Learn more about me?",
            contact_href: CONTACT_URL,
            portfolio_href: HOMEPAGE_URL,
        }
    }
}

/// Horizontally centered, width-bounded wrapper
pub struct Container;

impl Container {
    pub const CLASS: &'static str = "container mx-auto lg:px-60 sm:px-5";

    /// Wrap already-rendered child markup
    pub fn wrap(children: &str) -> String {
        format!(r#"<div class="{}">{}</div>"#, Self::CLASS, children)
    }
}
