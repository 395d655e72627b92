//! Listing views consumed by the blog and portfolio pages

use serde::Serialize;

use super::{category_options, filter_items, partition_featured, FilterState, Partition};
use crate::content::{BlogPost, CategoryOption, ContentStore, Project, PORTFOLIO_CATEGORIES};

/// Blog listing: category buttons plus featured and latest posts
#[derive(Debug, Serialize)]
pub struct BlogListing<'a> {
    pub filter: FilterState,
    pub categories: Vec<&'a str>,
    #[serde(flatten)]
    pub posts: Partition<'a, BlogPost>,
}

impl<'a> BlogListing<'a> {
    pub fn build<S: ContentStore + ?Sized>(store: &'a S, state: &FilterState) -> Self {
        let all_posts = store.posts_by_date();
        let featured = store.featured_posts();
        let matched = filter_items(all_posts.iter().copied(), state);

        Self {
            filter: state.clone(),
            categories: category_options(store.blog_posts()),
            posts: partition_featured(&matched, &featured, state),
        }
    }

    /// Heading for the regular section
    pub fn regular_heading(&self) -> &'static str {
        if self.filter.has_active_filter() {
            "Search Results"
        } else {
            "Latest Articles"
        }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Portfolio listing: fixed category buttons plus the filtered grid
#[derive(Debug, Serialize)]
pub struct PortfolioListing<'a> {
    pub filter: FilterState,
    pub categories: &'static [CategoryOption],
    pub projects: Vec<&'a Project>,
}

impl<'a> PortfolioListing<'a> {
    pub fn build<S: ContentStore + ?Sized>(store: &'a S, state: &FilterState) -> Self {
        Self {
            filter: state.clone(),
            categories: PORTFOLIO_CATEGORIES,
            projects: filter_items(store.projects(), state),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
