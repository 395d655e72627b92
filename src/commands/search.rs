//! Filter a listing the way the blog and portfolio pages do

use anyhow::Result;

use crate::filter::{BlogListing, FilterState, PortfolioListing};
use crate::Site;

/// Print the blog or portfolio listing for a category and query
pub fn run(site: &Site, section: &str, category: &str, query: &str, json: bool) -> Result<()> {
    let state = FilterState::new(category, query);

    match section {
        "blog" | "posts" => {
            let listing = BlogListing::build(&site.store, &state);
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
                return Ok(());
            }

            if listing.is_empty() {
                println!("No articles found.");
                return Ok(());
            }

            if !listing.posts.featured.is_empty() {
                println!("Featured ({}):", listing.posts.featured.len());
                for post in &listing.posts.featured {
                    println!("  {} [{}] - {}", post.title, post.category, post.read_time);
                }
            }
            if !listing.posts.regular.is_empty() {
                println!(
                    "{} ({}):",
                    listing.regular_heading(),
                    listing.posts.regular.len()
                );
                for post in &listing.posts.regular {
                    println!("  {} [{}] - {}", post.title, post.category, post.read_time);
                }
            }
        }
        "portfolio" | "projects" => {
            let listing = PortfolioListing::build(&site.store, &state);
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
                return Ok(());
            }

            if listing.is_empty() {
                println!("No projects found.");
                return Ok(());
            }

            println!("Projects ({}):", listing.projects.len());
            for project in &listing.projects {
                println!(
                    "  {} ({}) [{}]",
                    project.title,
                    project.category,
                    project.technologies.join(", ")
                );
            }
        }
        _ => {
            anyhow::bail!("Unknown section: {}. Available: blog, portfolio", section);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections() {
        let site = Site::embedded().unwrap();
        assert!(run(&site, "blog", "all", "", false).is_ok());
        assert!(run(&site, "blog", "SEO", "", true).is_ok());
        assert!(run(&site, "portfolio", "dashboard", "react", false).is_ok());
        assert!(run(&site, "portfolio", "all", "nothing-matches", false).is_ok());
        assert!(run(&site, "services", "all", "", false).is_err());
    }
}
