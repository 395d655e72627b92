//! Render a blog post body to HTML

use anyhow::Result;

use crate::content::{ContentStore, MarkdownRenderer};
use crate::Site;

/// Render the post with `slug`, printing its article header and HTML body
pub fn run(site: &Site, slug: &str, escape: bool) -> Result<()> {
    let html = render_post(site, slug, escape)?;
    println!("{}", html);
    Ok(())
}

/// Build the article fragment for a post
pub fn render_post(site: &Site, slug: &str, escape: bool) -> Result<String> {
    let post = site
        .store
        .post_by_slug(slug)
        .ok_or_else(|| anyhow::anyhow!("No post with slug: {}", slug))?;

    let renderer = if escape {
        MarkdownRenderer::escaping()
    } else {
        site.renderer()
    };
    let helpers = site.helpers();

    tracing::debug!(
        "Rendering {} (escape_html={})",
        post.slug,
        renderer.escapes_html()
    );

    let mut html = helpers.page_meta(Some(post)).to_html();
    html.push_str(&format!(
        "<p class=\"meta\">{} · {} · {}</p>\n",
        post.category,
        helpers.date(&post.published_at),
        post.read_time
    ));
    html.push_str(&format!(
        "<div class=\"prose\"><p>{}</p></div>\n",
        renderer.render(post.content.trim())
    ));

    let related = site.store.related_posts(&post.slug, site.config.related_posts);
    if !related.is_empty() {
        html.push_str("<!-- related -->\n");
        for other in related {
            html.push_str(&format!(
                "<a href=\"{}\">{}</a>\n",
                helpers.url_for(&format!("{}/{}", site.config.blog_dir, other.slug)),
                other.title
            ));
        }
    }

    let share = helpers.share_links(post);
    html.push_str(&format!("<!-- share: {} -->\n", share.copy));
    html.push_str(&helpers.footer());

    Ok(html)
}
