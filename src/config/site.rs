//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory
    /// Markdown posts, one file per post
    pub posts_dir: String,
    /// Static assets copied verbatim into the output
    pub assets_dir: String,
    /// Generated output
    pub public_dir: String,

    // Writing
    pub highlight_theme: String,
    pub line_numbers: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Tim Gu's Blog".to_string(),
            description: "A place where I rant. A lot".to_string(),
            language: "en".to_string(),

            url: "http://localhost:3000".to_string(),

            posts_dir: "_posts".to_string(),
            assets_dir: "public".to_string(),
            public_dir: "out".to_string(),

            highlight_theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "_posts");
        assert_eq!(config.public_dir, "out");
        assert!(!config.line_numbers);
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
title: My Blog
public_dir: dist
line_numbers: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.public_dir, "dist");
        assert!(config.line_numbers);
        // Unset keys fall back to defaults
        assert_eq!(config.posts_dir, "_posts");
        assert_eq!(config.assets_dir, "public");
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, SiteConfig::default().title);
    }
}
