//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub tagline: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,
    pub blog_dir: String,

    #[serde(default)]
    pub contact: ContactConfig,

    /// Network name to profile URL, in display order
    #[serde(default)]
    pub social: IndexMap<String, String>,

    #[serde(default)]
    pub seo: SeoConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Maximum related posts listed under an article
    pub related_posts: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut social = IndexMap::new();
        for (network, url) in [
            ("facebook", "https://facebook.com/skwebtech"),
            ("twitter", "https://twitter.com/skwebtech"),
            ("linkedin", "https://linkedin.com/company/skwebtech"),
            ("instagram", "https://instagram.com/skwebtech"),
            ("github", "https://github.com/skwebtech"),
        ] {
            social.insert(network.to_string(), url.to_string());
        }

        Self {
            name: "SK WebTech".to_string(),
            tagline: "Professional Web & IT Solutions".to_string(),
            description: "SK WebTech delivers web development, e-commerce solutions, SEO \
                          optimization, and IT services to help your business grow online."
                .to_string(),

            url: "https://skwebtech.com".to_string(),
            root: "/".to_string(),
            blog_dir: "blog".to_string(),

            contact: ContactConfig::default(),
            social,
            seo: SeoConfig::default(),
            content: ContentConfig::default(),
            markdown: MarkdownConfig::default(),
            related_posts: 3,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply the SEO title template to a page title
    pub fn page_title(&self, title: Option<&str>) -> String {
        match title {
            Some(title) if !title.trim().is_empty() => {
                self.seo.title_template.replace("%s", title.trim())
            }
            _ => self.seo.default_title.clone(),
        }
    }
}

/// Contact details shown in the footer and floating buttons
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@skwebtech.com".to_string(),
            phone: "+1234567890".to_string(),
            whatsapp: "1234567890".to_string(),
        }
    }
}

/// SEO defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub default_title: String,
    /// `%s` is replaced by the page title
    pub title_template: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            default_title: "SK WebTech - Professional Web & IT Solutions".to_string(),
            title_template: "%s | SK WebTech".to_string(),
            keywords: [
                "web development",
                "IT services",
                "e-commerce solutions",
                "SEO optimization",
                "app development",
                "UI/UX design",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        }
    }
}

/// Optional data files replacing the built-in collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Blog posts YAML, relative to the base directory
    pub blog: Option<PathBuf>,
    /// Portfolio projects YAML, relative to the base directory
    pub portfolio: Option<PathBuf>,
}

/// Markdown rendering options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Escape raw HTML before rendering; enable for untrusted content
    pub escape_html: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "SK WebTech");
        assert_eq!(config.related_posts, 3);
        assert!(!config.markdown.escape_html);
        assert_eq!(config.social.keys().next().map(String::as_str), Some("facebook"));
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
name: Acme IT
url: https://acme.example
related_posts: 5
seo:
  title_template: "%s - Acme"
content:
  blog: data/blog.yml
markdown:
  escape_html: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "Acme IT");
        assert_eq!(config.url, "https://acme.example");
        assert_eq!(config.related_posts, 5);
        assert_eq!(config.content.blog, Some(PathBuf::from("data/blog.yml")));
        assert!(config.content.portfolio.is_none());
        assert!(config.markdown.escape_html);
        // unspecified nested fields keep their defaults
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(config.contact.email, "hello@skwebtech.com");
    }

    #[test]
    fn test_page_title() {
        let config = SiteConfig::default();
        assert_eq!(config.page_title(Some("Blog")), "Blog | SK WebTech");
        assert_eq!(
            config.page_title(None),
            "SK WebTech - Professional Web & IT Solutions"
        );
        assert_eq!(config.page_title(Some("  ")), config.seo.default_title);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "name: From File\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.name, "From File");
        assert_eq!(config.url, "https://skwebtech.com");
    }
}
