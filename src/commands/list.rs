//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::{ContentStore, PORTFOLIO_CATEGORIES};
use crate::helpers::footer_links;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = &site.store;

    match content_type {
        "post" | "posts" => {
            let posts = store.posts_by_date();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]{}",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.slug,
                    if post.featured { " *" } else { "" }
                );
            }
        }
        "project" | "projects" => {
            let projects = store.projects();
            println!("Projects ({}):", projects.len());
            for project in projects {
                println!(
                    "  {} - {} ({}) [{}]",
                    project.id,
                    project.title,
                    project.category,
                    project.technologies.join(", ")
                );
            }
        }
        "featured" => {
            let posts = store.featured_posts();
            println!("Featured posts ({}):", posts.len());
            for post in posts {
                println!("  {} [{}]", post.title, post.slug);
            }
            let projects = store.featured_projects();
            println!("Featured projects ({}):", projects.len());
            for project in projects {
                println!("  {} ({})", project.title, project.category);
            }
        }
        "tag" | "tags" => {
            let counts = count_by(store.blog_posts().iter().flat_map(|p| p.tags.iter()));
            let tags = store.blog_tags();
            println!("Tags ({}):", tags.len());
            for tag in tags {
                println!("  {} ({})", tag, counts.get(tag).copied().unwrap_or(0));
            }
        }
        "category" | "categories" => {
            let counts = count_by(store.blog_posts().iter().map(|p| &p.category));
            let categories = store.blog_categories();
            println!("Blog categories ({}):", categories.len());
            for category in categories {
                println!(
                    "  {} ({})",
                    category,
                    counts.get(category).copied().unwrap_or(0)
                );
            }

            println!("Portfolio categories ({}):", PORTFOLIO_CATEGORIES.len());
            for option in PORTFOLIO_CATEGORIES {
                println!(
                    "  {} - {} ({})",
                    option.id,
                    option.name,
                    store.projects_by_category(option.id).len()
                );
            }
        }
        "site" => {
            let meta = site.helpers().page_meta(None);
            println!("{} - {}", site.config.name, site.config.tagline);
            println!("  title: {}", meta.title);
            println!("  description: {}", meta.description);
            println!("  keywords: {}", meta.keywords.join(", "));
            println!("Links:");
            for link in footer_links(&site.config) {
                println!("  {} - {}", link.label, link.href);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, projects, featured, tags, categories, site",
                content_type
            );
        }
    }

    Ok(())
}

fn count_by<'a, I: Iterator<Item = &'a String>>(labels: I) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for label in labels {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }
    counts
}
