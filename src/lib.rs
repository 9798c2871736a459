//! blogs-rs: a personal blog front-end rendered to static HTML
//!
//! Posts are read from markdown files by a [`content::ContentProvider`],
//! composed into typed page components and rendered with embedded Tera
//! templates.

pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Configuration file name, looked up in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown posts directory
    pub posts_dir: PathBuf,
    /// Static assets directory
    pub assets_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let assets_dir = base_dir.join(&config.assets_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            assets_dir,
            public_dir,
        })
    }

    /// Provider reading this blog's posts directory
    pub fn provider(&self) -> content::FileContentProvider {
        content::FileContentProvider::for_blog(self)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<generator::GenerateSummary> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, slug: Option<&str>) -> Result<PathBuf> {
        commands::new::create_post(self, title, slug)
    }
}
