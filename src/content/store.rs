//! Read-only content store abstraction
//!
//! Listing and rendering code only sees collections through [`ContentStore`],
//! so the embedded seed data can be swapped for another source without
//! touching filter or markdown logic.

use indexmap::IndexSet;

use super::project::ALL_CATEGORIES;
use super::{BlogPost, Project};

/// Provider of the immutable blog and portfolio collections
pub trait ContentStore {
    /// All blog posts in authored order
    fn blog_posts(&self) -> &[BlogPost];

    /// All portfolio projects in authored order
    fn projects(&self) -> &[Project];

    /// Posts sorted newest first; ties keep authored order
    fn posts_by_date(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.blog_posts().iter().collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }

    /// Posts flagged as featured
    fn featured_posts(&self) -> Vec<&BlogPost> {
        self.blog_posts().iter().filter(|p| p.featured).collect()
    }

    fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts().iter().find(|p| p.slug == slug)
    }

    fn posts_by_category(&self, category: &str) -> Vec<&BlogPost> {
        self.blog_posts()
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Other posts sharing the category or at least one tag with `slug`
    fn related_posts(&self, slug: &str, limit: usize) -> Vec<&BlogPost> {
        let Some(current) = self.post_by_slug(slug) else {
            return Vec::new();
        };

        self.blog_posts()
            .iter()
            .filter(|p| p.slug != slug && p.is_related_to(current))
            .take(limit)
            .collect()
    }

    /// Distinct blog categories in first-occurrence order
    fn blog_categories(&self) -> Vec<&str> {
        let categories: IndexSet<&str> = self
            .blog_posts()
            .iter()
            .map(|p| p.category.as_str())
            .collect();
        categories.into_iter().collect()
    }

    /// Distinct blog tags in first-occurrence order
    fn blog_tags(&self) -> Vec<&str> {
        let tags: IndexSet<&str> = self
            .blog_posts()
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().collect()
    }

    fn featured_projects(&self) -> Vec<&Project> {
        self.projects().iter().filter(|p| p.featured).collect()
    }

    /// Projects in a category; the "all" token returns every project
    fn projects_by_category(&self, category: &str) -> Vec<&Project> {
        self.projects()
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category.as_str() == category)
            .collect()
    }
}
