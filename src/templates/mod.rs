//! Built-in blog templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off: plain-text
//! fields go through the `escape_text` filter, while the `*_html` fields of
//! the view models are finished markup and are emitted as-is.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::components::{Container, Feed, HomePage, PostPage};
use crate::config::SiteConfig;
use crate::helpers::escape_html;

/// Template renderer with the embedded blog templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            ("post.html", include_str!("blog/post.html")),
            // Partials
            (
                "partials/avatar.html",
                include_str!("blog/partials/avatar.html"),
            ),
            (
                "partials/header.html",
                include_str!("blog/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("blog/partials/footer.html"),
            ),
            (
                "partials/intro.html",
                include_str!("blog/partials/intro.html"),
            ),
            (
                "partials/stories.html",
                include_str!("blog/partials/stories.html"),
            ),
            (
                "partials/post_preview.html",
                include_str!("blog/partials/post_preview.html"),
            ),
        ])?;

        tera.register_filter("escape_text", escape_text_filter);
        tera.register_filter("container", container_filter);

        Ok(Self { tera })
    }

    /// Render the home page
    ///
    /// The feed partial is only included when the page has a populated feed.
    pub fn render_home(&self, config: &SiteConfig, page: &HomePage) -> Result<String> {
        let mut context = Context::new();
        context.insert("config", config);
        context.insert("page", page);
        context.insert("avatar", &page.intro.avatar);
        context.insert("footer", &page.footer);
        if let Feed::Populated(view) = &page.feed {
            context.insert("feed", view);
        }

        self.render("index.html", &context)
    }

    /// Render a post detail page
    pub fn render_post(&self, config: &SiteConfig, post: &PostPage) -> Result<String> {
        let mut context = Context::new();
        context.insert("config", config);
        context.insert("post", post);
        context.insert("avatar", &post.header.avatar);
        context.insert("footer", &post.footer);

        self.render("post.html", &context)
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape plain text for HTML
fn escape_text_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_text", "value", String, value);
    Ok(tera::Value::String(escape_html(&s)))
}

/// Tera filter: wrap a rendered section in the page container
fn container_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("container", "value", String, value);
    Ok(tera::Value::String(Container::wrap(s.trim())))
}
