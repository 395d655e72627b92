//! Date helper functions

use chrono::NaiveDate;

/// Format a date the way article headers show it (like "December 10, 2025")
pub fn display_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a date for sitemap `<lastmod>` (W3C date)
pub fn date_w3c(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
