//! Listing filter engine
//!
//! Computes the visible subset of a content collection for a category
//! selection and a free-text query. Every function here is total: a filter
//! that matches nothing yields an empty vector, never an error.

mod listing;

use indexmap::IndexSet;
use serde::Serialize;

use crate::content::{BlogPost, Project, ALL_CATEGORIES};

pub use listing::{BlogListing, PortfolioListing};

/// Capability shared by everything a listing view can filter
pub trait Listing {
    fn id(&self) -> &str;

    /// Category label compared verbatim against the active category
    fn category(&self) -> &str;

    /// Fields searched by the text query
    fn search_fields(&self) -> Vec<&str>;

    fn is_featured(&self) -> bool;

    /// Whether any searchable field contains `needle`, which must already be lowercase
    fn matches_query(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Listing for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.excerpt.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields.push(&self.category);
        fields
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Listing for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields.push(self.category.as_str());
        fields
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

/// Per-view filter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub active_category: String,
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(category: &str, query: &str) -> Self {
        Self {
            active_category: category.to_string(),
            search_query: query.to_string(),
        }
    }

    pub fn select_category(&mut self, category: &str) {
        self.active_category = category.to_string();
    }

    pub fn set_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trimmed, lowercased query; `None` when blank
    pub fn normalized_query(&self) -> Option<String> {
        let query = self.search_query.trim();
        if query.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        }
    }

    /// True unless the category is "all" and the query is blank
    pub fn has_active_filter(&self) -> bool {
        self.active_category != ALL_CATEGORIES || self.normalized_query().is_some()
    }

    fn category_matches<T: Listing + ?Sized>(&self, item: &T) -> bool {
        self.active_category == ALL_CATEGORIES || item.category() == self.active_category
    }
}

/// Featured/regular split of a blog listing
#[derive(Debug, Serialize)]
pub struct Partition<'a, T> {
    pub featured: Vec<&'a T>,
    pub regular: Vec<&'a T>,
}

impl<T> Partition<'_, T> {
    /// Nothing to show; the view renders its "no results" state
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }

    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }
}

/// Items matching both the category and the text predicate, in input order
pub fn filter_items<'a, T, I>(items: I, state: &FilterState) -> Vec<&'a T>
where
    T: Listing + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = state.normalized_query();

    let matched: Vec<&T> = items
        .into_iter()
        .filter(|item| state.category_matches(*item))
        .filter(|item| match &needle {
            Some(needle) => item.matches_query(needle),
            None => true,
        })
        .collect();

    tracing::debug!(
        "Filter category={:?} query={:?} matched {} items",
        state.active_category,
        state.search_query,
        matched.len()
    );

    matched
}

/// Split a filtered blog listing into featured and regular posts.
///
/// With no active filter the featured half is the curated `all_featured`
/// list, independent of `matched`. Once any filter is active both halves are
/// taken from `matched`.
pub fn partition_featured<'a, T: Listing>(
    matched: &[&'a T],
    all_featured: &[&'a T],
    state: &FilterState,
) -> Partition<'a, T> {
    let regular = matched
        .iter()
        .copied()
        .filter(|item| !item.is_featured())
        .collect();

    let featured = if state.has_active_filter() {
        matched
            .iter()
            .copied()
            .filter(|item| item.is_featured())
            .collect()
    } else {
        all_featured.to_vec()
    };

    Partition { featured, regular }
}

/// Distinct category labels in first-occurrence order
pub fn category_options<'a, T, I>(items: I) -> Vec<&'a str>
where
    T: Listing + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let categories: IndexSet<&str> = items.into_iter().map(|item| item.category()).collect();
    categories.into_iter().collect()
}
