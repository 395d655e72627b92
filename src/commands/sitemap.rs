//! Write sitemap.xml

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;

use crate::helpers::{build_sitemap, sitemap_xml};
use crate::Site;

/// Print the sitemap, or write it to `output` when given
pub fn run(site: &Site, output: Option<&Path>) -> Result<()> {
    let entries = build_sitemap(&site.config, &site.store, Local::now().date_naive());
    let xml = sitemap_xml(&entries);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, xml)?;
            tracing::info!("Wrote {} sitemap entries to {:?}", entries.len(), path);
        }
        None => print!("{}", xml),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_sitemap_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("sitemap.xml");
        let site = Site::embedded().unwrap();

        run(&site, Some(&path)).unwrap();

        let xml = fs::read_to_string(&path).unwrap();
        assert_eq!(xml.matches("<url>").count(), 12);
        assert!(xml.contains("<loc>https://skwebtech.com/portfolio</loc>"));
    }
}
