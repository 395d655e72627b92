//! Content module - blog posts, portfolio projects and markdown rendering

pub mod loader;
mod markdown;
mod post;
mod project;
mod store;

pub use loader::{ContentError, StaticContentStore};
pub use markdown::{html_escape, MarkdownRenderer};
pub use post::{Author, BlogPost};
pub use project::{CategoryOption, Project, ProjectCategory, ALL_CATEGORIES, PORTFOLIO_CATEGORIES};
pub use store::ContentStore;
