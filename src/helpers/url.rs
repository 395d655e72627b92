//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::BlogPost;

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/portfolio") // -> "/portfolio"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about") // -> "https://skwebtech.com/about"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Site-relative path of a blog post
pub fn post_path(config: &SiteConfig, post: &BlogPost) -> String {
    url_for(
        config,
        &format!("{}/{}", config.blog_dir.trim_matches('/'), post.slug),
    )
}

/// Absolute URL of a blog post
pub fn post_url(config: &SiteConfig, post: &BlogPost) -> String {
    full_url_for(config, &post_path(config, post))
}

/// Percent-encode a query component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Social share targets for an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    /// Plain URL for the copy-link button
    pub copy: String,
}

impl ShareLinks {
    pub fn for_post(config: &SiteConfig, post: &BlogPost) -> Self {
        let url = post_url(config, post);
        let encoded_url = encode_component(&url);
        let encoded_title = encode_component(&post.title);

        Self {
            facebook: format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                encoded_url
            ),
            twitter: format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encoded_url, encoded_title
            ),
            linkedin: format!(
                "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
                encoded_url, encoded_title
            ),
            copy: url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_post() -> BlogPost {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        BlogPost::new("4", "Native vs Cross-Platform: 2025", "App Development", date)
    }

    #[test]
    fn test_url_for() {
        let mut config = SiteConfig::default();
        assert_eq!(url_for(&config, "/portfolio"), "/portfolio");
        assert_eq!(url_for(&config, ""), "/");

        config.root = "/site/".to_string();
        assert_eq!(url_for(&config, "about"), "/site/about");
    }

    #[test]
    fn test_full_url_for() {
        let mut config = SiteConfig::default();
        config.url = "https://skwebtech.com/".to_string();
        assert_eq!(full_url_for(&config, "/about"), "https://skwebtech.com/about");
        assert_eq!(full_url_for(&config, ""), "https://skwebtech.com/");
    }

    #[test]
    fn test_post_url() {
        let config = SiteConfig::default();
        let post = test_post();
        assert_eq!(post_path(&config, &post), "/blog/native-vs-cross-platform-2025");
        assert_eq!(
            post_url(&config, &post),
            "https://skwebtech.com/blog/native-vs-cross-platform-2025"
        );
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(
            encode_component("https://a.com/b?c=d"),
            "https%3A%2F%2Fa.com%2Fb%3Fc%3Dd"
        );
        assert_eq!(encode_component("Don't (panic)!"), "Don't%20(panic)!");
    }

    #[test]
    fn test_share_links() {
        let config = SiteConfig::default();
        let links = ShareLinks::for_post(&config, &test_post());

        let encoded = "https%3A%2F%2Fskwebtech.com%2Fblog%2Fnative-vs-cross-platform-2025";
        assert_eq!(
            links.facebook,
            format!("https://www.facebook.com/sharer/sharer.php?u={}", encoded)
        );
        assert!(links
            .twitter
            .ends_with("&text=Native%20vs%20Cross-Platform%3A%202025"));
        assert!(links.linkedin.contains("mini=true"));
        assert_eq!(
            links.copy,
            "https://skwebtech.com/blog/native-vs-cross-platform-2025"
        );
    }
}
