//! Page head and footer helpers

use serde::Serialize;

use super::url::{encode_component, url_for};
use crate::config::SiteConfig;
use crate::content::{html_escape, BlogPost};

/// Title, description and keywords for a page `<head>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl PageMeta {
    /// Site-wide defaults
    pub fn site(config: &SiteConfig) -> Self {
        Self {
            title: config.page_title(None),
            description: config.description.clone(),
            keywords: config.seo.keywords.clone(),
        }
    }

    /// Article metadata; posts without tags fall back to the site keywords
    pub fn for_post(config: &SiteConfig, post: &BlogPost) -> Self {
        let keywords = if post.tags.is_empty() {
            config.seo.keywords.clone()
        } else {
            post.tags.clone()
        };

        Self {
            title: config.page_title(Some(post.title.as_str())),
            description: post.excerpt.clone(),
            keywords,
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<title>{}</title>\n<meta name=\"description\" content=\"{}\">\n<meta name=\"keywords\" content=\"{}\">\n",
            html_escape(&self.title),
            html_escape(&self.description),
            html_escape(&self.keywords.join(", "))
        )
    }
}

/// A labelled footer link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterLink {
    fn new(label: &str, href: String) -> Self {
        Self {
            label: label.to_string(),
            href,
        }
    }
}

/// Chat link with the prefilled enquiry message
pub fn whatsapp_url(config: &SiteConfig) -> String {
    let message = format!(
        "Hi {}! I would like to inquire about your services.",
        config.name
    );
    format!(
        "https://wa.me/{}?text={}",
        config.contact.whatsapp,
        encode_component(&message)
    )
}

/// Contact links followed by the social profiles, in configured order
pub fn footer_links(config: &SiteConfig) -> Vec<FooterLink> {
    let contact = &config.contact;
    let mut links = vec![
        FooterLink::new("Email", format!("mailto:{}", contact.email)),
        FooterLink::new("Phone", format!("tel:{}", contact.phone)),
        FooterLink::new("WhatsApp", whatsapp_url(config)),
    ];
    links.extend(
        config
            .social
            .iter()
            .map(|(network, url)| FooterLink::new(network, url.clone())),
    );
    links
}

/// Site footer: name, tagline and contact links
pub fn footer_html(config: &SiteConfig) -> String {
    let mut html = format!(
        "<footer>\n<a href=\"{}\">{}</a> - {}\n",
        url_for(config, ""),
        html_escape(&config.name),
        html_escape(&config.tagline)
    );
    for link in footer_links(config) {
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>\n",
            html_escape(&link.href),
            html_escape(&link.label)
        ));
    }
    html.push_str("</footer>\n");
    html
}
