//! Content loader - builds the static content store from YAML data

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{BlogPost, ContentStore, Project};

const EMBEDDED_BLOG: &str = include_str!("seed/blog.yml");
const EMBEDDED_PORTFOLIO: &str = include_str!("seed/portfolio.yml");

/// Errors raised while loading or validating content collections
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Duplicate blog post id: {0}")]
    DuplicatePostId(String),

    #[error("Duplicate blog post slug: {0}")]
    DuplicateSlug(String),

    #[error("Blog post {0} has an empty slug")]
    EmptySlug(String),

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),
}

/// Immutable in-memory content, loaded once and shared read-only
#[derive(Debug, Clone)]
pub struct StaticContentStore {
    posts: Vec<BlogPost>,
    projects: Vec<Project>,
}

impl StaticContentStore {
    /// Build a store from already-parsed collections, validating identifiers
    pub fn from_parts(
        mut posts: Vec<BlogPost>,
        projects: Vec<Project>,
    ) -> Result<Self, ContentError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for post in &mut posts {
            if post.slug.trim().is_empty() {
                post.slug = slug::slugify(&post.title);
                tracing::debug!("Derived slug {:?} for post {}", post.slug, post.id);
            }
            if post.slug.is_empty() {
                return Err(ContentError::EmptySlug(post.id.clone()));
            }
            if !ids.insert(post.id.clone()) {
                return Err(ContentError::DuplicatePostId(post.id.clone()));
            }
            if !slugs.insert(post.slug.clone()) {
                return Err(ContentError::DuplicateSlug(post.slug.clone()));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &projects {
            if !project_ids.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
        }

        Ok(Self { posts, projects })
    }

    /// The seed collections compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        let posts = parse_posts(EMBEDDED_BLOG, "embedded blog data")?;
        let projects = parse_projects(EMBEDDED_PORTFOLIO, "embedded portfolio data")?;
        Self::from_parts(posts, projects)
    }

    /// Load both collections from YAML files
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        blog_path: P,
        portfolio_path: Q,
    ) -> Result<Self, ContentError> {
        let posts = load_posts(blog_path.as_ref())?;
        let projects = load_projects(portfolio_path.as_ref())?;
        Self::from_parts(posts, projects)
    }

    /// Load each collection from its file when given, otherwise from the seed data
    pub fn load_with_fallback(
        blog_path: Option<&Path>,
        portfolio_path: Option<&Path>,
    ) -> Result<Self, ContentError> {
        let posts = match blog_path {
            Some(path) => load_posts(path)?,
            None => parse_posts(EMBEDDED_BLOG, "embedded blog data")?,
        };
        let projects = match portfolio_path {
            Some(path) => load_projects(path)?,
            None => parse_projects(EMBEDDED_PORTFOLIO, "embedded portfolio data")?,
        };

        tracing::debug!(
            "Loaded {} blog posts and {} projects",
            posts.len(),
            projects.len()
        );

        Self::from_parts(posts, projects)
    }
}

impl ContentStore for StaticContentStore {
    fn blog_posts(&self) -> &[BlogPost] {
        &self.posts
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }
}

fn read_file(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_posts(path: &Path) -> Result<Vec<BlogPost>, ContentError> {
    let content = read_file(path)?;
    parse_posts(&content, &path.display().to_string())
}

fn load_projects(path: &Path) -> Result<Vec<Project>, ContentError> {
    let content = read_file(path)?;
    parse_projects(&content, &path.display().to_string())
}

fn parse_posts(content: &str, origin: &str) -> Result<Vec<BlogPost>, ContentError> {
    serde_yaml::from_str(content).map_err(|source| ContentError::Parse {
        origin: origin.to_string(),
        source,
    })
}

fn parse_projects(content: &str, origin: &str) -> Result<Vec<Project>, ContentError> {
    serde_yaml::from_str(content).map_err(|source| ContentError::Parse {
        origin: origin.to_string(),
        source,
    })
}
