//! webtech-site: content core for the SK WebTech marketing site
//!
//! This crate holds the blog and portfolio collections, the listing filter
//! engine used by the interactive listing pages, and the markdown-subset
//! renderer for article bodies. Page layout and styling live elsewhere.

pub mod commands;
pub mod config;
pub mod content;
pub mod filter;
pub mod helpers;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use content::{MarkdownRenderer, StaticContentStore};

/// The loaded site: configuration plus its content collections
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog and portfolio content
    pub store: StaticContentStore,
}

impl Site {
    /// Load a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading configuration from {:?}", config_path);
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            config::SiteConfig::default()
        };

        let blog_path = config.content.blog.as_ref().map(|p| base_dir.join(p));
        let portfolio_path = config.content.portfolio.as_ref().map(|p| base_dir.join(p));
        let store = StaticContentStore::load_with_fallback(
            blog_path.as_deref(),
            portfolio_path.as_deref(),
        )?;

        Ok(Self {
            config,
            base_dir,
            store,
        })
    }

    /// Site with default configuration and the built-in content
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            config: config::SiteConfig::default(),
            base_dir: PathBuf::from("."),
            store: StaticContentStore::embedded()?,
        })
    }

    /// Markdown renderer configured for this site
    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::with_options(self.config.markdown.escape_html)
    }

    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use std::fs;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.name, "SK WebTech");
        assert_eq!(site.store.blog_posts().len(), 6);
        assert!(!site.renderer().escapes_html());
    }

    #[test]
    fn test_new_reads_config_and_content_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "name: Test Site\ncontent:\n  portfolio: projects.yml\nmarkdown:\n  escape_html: true\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("projects.yml"),
            "- id: '1'\n  title: Only\n  description: One project\n  image: /x.jpg\n  category: web\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.name, "Test Site");
        assert_eq!(site.store.projects().len(), 1);
        assert_eq!(site.store.blog_posts().len(), 6);
        assert!(site.renderer().escapes_html());
    }

    #[test]
    fn test_bad_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "related_posts: [oops]\n").unwrap();
        assert!(Site::new(dir.path()).is_err());
    }
}
