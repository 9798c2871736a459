//! Front-matter parsing

use serde::{Deserialize, Serialize};

use super::Author;

/// Open Graph image block (`ogImage: { url: ... }`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
}

/// Front-matter data of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub cover_image: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<Author>,
    pub og_image: Option<OgImage>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content without a `---` fenced block yields default front-matter and
    /// the whole input as body.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let trimmed = content.trim_start();

        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // Front-matter closed immediately: "---\n---"
        if let Some(body) = rest.strip_prefix("---") {
            return Ok((FrontMatter::default(), body.trim_start_matches(['\n', '\r'])));
        }

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml)?;
        Ok((fm, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: "Dynamic Routing and Static Generation"
excerpt: "Lorem ipsum dolor sit amet."
coverImage: "/assets/blog/dynamic-routing/cover.jpg"
date: "2020-03-16T05:35:07.322Z"
author:
  name: Tim Gu
  picture: "/assets/blog/avatar/tim.jpeg"
ogImage:
  url: "/assets/blog/dynamic-routing/cover.jpg"
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(
            fm.title.as_deref(),
            Some("Dynamic Routing and Static Generation")
        );
        assert_eq!(fm.date.as_deref(), Some("2020-03-16T05:35:07.322Z"));
        assert_eq!(
            fm.cover_image.as_deref(),
            Some("/assets/blog/dynamic-routing/cover.jpg")
        );
        assert_eq!(fm.author.unwrap().name, "Tim Gu");
        assert_eq!(fm.og_image.unwrap().url, "/assets/blog/dynamic-routing/cover.jpg");
        assert_eq!(body.trim(), "This is the content.");
    }

    #[test]
    fn test_unquoted_date_stays_a_string() {
        let content = "---\ntitle: Hello\ndate: 2024-01-01\n---\nBody\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just some markdown.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let content = "---\ntitle: Hello\nno closing fence";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nBody\n";
        assert!(FrontMatter::parse(content).is_err());
    }
}
