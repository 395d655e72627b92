//! Helper functions for page rendering
//!
//! URL building, share links, display dates, page head and footer markup,
//! and the sitemap. Pages receive these alongside the listing and markdown
//! output.

mod date;
mod page;
mod sitemap;
mod url;

pub use date::*;
pub use page::*;
pub use sitemap::*;
pub use url::*;

use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::content::BlogPost;

/// Helpers bound to one site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn url_for(&self, path: &str) -> String {
        url_for(&self.config, path)
    }

    pub fn full_url_for(&self, path: &str) -> String {
        full_url_for(&self.config, path)
    }

    pub fn post_url(&self, post: &BlogPost) -> String {
        post_url(&self.config, post)
    }

    pub fn share_links(&self, post: &BlogPost) -> ShareLinks {
        ShareLinks::for_post(&self.config, post)
    }

    pub fn page_title(&self, title: Option<&str>) -> String {
        self.config.page_title(title)
    }

    /// Head metadata for an article, or the site defaults
    pub fn page_meta(&self, post: Option<&BlogPost>) -> PageMeta {
        match post {
            Some(post) => PageMeta::for_post(&self.config, post),
            None => PageMeta::site(&self.config),
        }
    }

    pub fn footer(&self) -> String {
        footer_html(&self.config)
    }

    /// Format a date for display
    pub fn date(&self, date: &NaiveDate) -> String {
        display_date(date)
    }
}
