//! CLI entry point for webtech-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "webtech-site")]
#[command(version)]
#[command(about = "Browse, filter and render the SK WebTech site content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (posts, projects, featured, tags, categories, site)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Filter the blog or portfolio listing
    #[command(alias = "s")]
    Search {
        /// Listing to filter (blog, portfolio)
        #[arg(default_value = "blog")]
        section: String,

        /// Category to show ("all" for every category)
        #[arg(short = 'C', long, default_value = "all")]
        category: String,

        /// Free-text query
        #[arg(short, long, default_value = "")]
        query: String,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a blog post to HTML
    #[command(alias = "r")]
    Render {
        /// Slug of the post
        slug: String,

        /// Escape raw HTML in the post body
        #[arg(long)]
        escape: bool,
    },

    /// Generate sitemap.xml
    Sitemap {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "webtech_site=debug,info"
    } else {
        "webtech_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = webtech_site::Site::new(&base_dir)?;
            webtech_site::commands::list::run(&site, &r#type)?;
        }

        Commands::Search {
            section,
            category,
            query,
            json,
        } => {
            let site = webtech_site::Site::new(&base_dir)?;
            tracing::debug!(
                "Filtering {} by category={:?} query={:?}",
                section,
                category,
                query
            );
            webtech_site::commands::search::run(&site, &section, &category, &query, json)?;
        }

        Commands::Render { slug, escape } => {
            let site = webtech_site::Site::new(&base_dir)?;
            webtech_site::commands::render::run(&site, &slug, escape)?;
        }

        Commands::Sitemap { output } => {
            let site = webtech_site::Site::new(&base_dir)?;
            let output = output.map(|path| {
                if path.is_absolute() {
                    path
                } else {
                    base_dir.join(path)
                }
            });
            webtech_site::commands::sitemap::run(&site, output.as_deref())?;
        }

        Commands::Version => {
            println!("webtech-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
