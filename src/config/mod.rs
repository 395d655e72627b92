//! Configuration module

mod site;

pub use site::ContactConfig;
pub use site::ContentConfig;
pub use site::MarkdownConfig;
pub use site::SeoConfig;
pub use site::SiteConfig;
