//! Blog post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Byline attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Unique within the blog collection
    pub id: String,

    /// URL-safe identifier, derived from the title when omitted
    #[serde(default)]
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown on cards
    pub excerpt: String,

    /// Raw markdown-subset body
    pub content: String,

    /// Cover image URI
    pub cover_image: String,

    /// Single category label
    pub category: String,

    /// Post author
    pub author: Author,

    /// Publication date
    pub published_at: NaiveDate,

    /// Display string such as "5 min read"
    pub read_time: String,

    /// Post tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Curated for the featured section
    #[serde(default)]
    pub featured: bool,
}

impl BlogPost {
    /// Create a post with the required fields, leaving the rest empty
    pub fn new(id: &str, title: &str, category: &str, published_at: NaiveDate) -> Self {
        Self {
            id: id.to_string(),
            slug: slug::slugify(title),
            title: title.to_string(),
            excerpt: String::new(),
            content: String::new(),
            cover_image: String::new(),
            category: category.to_string(),
            author: Author {
                name: String::new(),
                role: String::new(),
                avatar: None,
            },
            published_at,
            read_time: String::new(),
            tags: Vec::new(),
            featured: false,
        }
    }

    /// Whether this post shares a category or any tag with `other`
    pub fn is_related_to(&self, other: &BlogPost) -> bool {
        self.category == other.category || self.tags.iter().any(|t| other.tags.contains(t))
    }
}
