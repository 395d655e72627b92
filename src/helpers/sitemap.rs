//! XML sitemap for the static pages and every blog post

use chrono::NaiveDate;
use serde::Serialize;

use super::date::date_w3c;
use super::url::{full_url_for, post_url};
use crate::config::SiteConfig;
use crate::content::{html_escape, ContentStore};

/// Static routes, home first
const STATIC_PAGES: &[&str] = &["", "/services", "/portfolio", "/about", "/contact", "/blog"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Build sitemap entries; static pages are stamped with `build_date`
pub fn build_sitemap<S: ContentStore + ?Sized>(
    config: &SiteConfig,
    store: &S,
    build_date: NaiveDate,
) -> Vec<SitemapEntry> {
    let static_routes = STATIC_PAGES.iter().map(|route| {
        let is_home = route.is_empty();
        SitemapEntry {
            loc: full_url_for(config, route).trim_end_matches('/').to_string(),
            last_modified: build_date,
            change_frequency: if is_home {
                ChangeFrequency::Weekly
            } else {
                ChangeFrequency::Monthly
            },
            priority: if is_home { 1.0 } else { 0.8 },
        }
    });

    let blog_routes = store.posts_by_date().into_iter().map(|post| SitemapEntry {
        loc: post_url(config, post),
        last_modified: post.published_at,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.7,
    });

    static_routes.chain(blog_routes).collect()
}

/// Serialize entries as a sitemap.xml document
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            html_escape(&entry.loc),
            date_w3c(&entry.last_modified),
            entry.change_frequency.as_str(),
            entry.priority
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticContentStore;

    fn build_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_build_sitemap() {
        let config = SiteConfig::default();
        let store = StaticContentStore::embedded().unwrap();
        let entries = build_sitemap(&config, &store, build_date());

        assert_eq!(entries.len(), STATIC_PAGES.len() + 6);

        let home = &entries[0];
        assert_eq!(home.loc, "https://skwebtech.com");
        assert_eq!(home.change_frequency, ChangeFrequency::Weekly);
        assert_eq!(home.priority, 1.0);
        assert_eq!(home.last_modified, build_date());

        assert_eq!(entries[1].loc, "https://skwebtech.com/services");
        assert_eq!(entries[1].priority, 0.8);

        let first_post = &entries[STATIC_PAGES.len()];
        assert_eq!(
            first_post.loc,
            "https://skwebtech.com/blog/why-your-business-needs-a-professional-website-in-2025"
        );
        assert_eq!(
            first_post.last_modified,
            NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()
        );
        assert_eq!(first_post.priority, 0.7);
    }

    #[test]
    fn test_sitemap_xml() {
        let entries = vec![SitemapEntry {
            loc: "https://a.example/blog/x?y=1&z=2".to_string(),
            last_modified: build_date(),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.7,
        }];
        let xml = sitemap_xml(&entries);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.contains("<loc>https://a.example/blog/x?y=1&amp;z=2</loc>"));
        assert!(xml.contains("<lastmod>2026-01-15</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
