//! Portfolio project model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category token meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// The closed set of categories a project may belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Ecommerce,
    Mobile,
    Dashboard,
    Edtech,
}

impl ProjectCategory {
    /// The label stored in data files and compared against filter state
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Ecommerce => "ecommerce",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Dashboard => "dashboard",
            ProjectCategory::Edtech => "edtech",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter button: token plus display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// Portfolio filter buttons, in display order
pub const PORTFOLIO_CATEGORIES: &[CategoryOption] = &[
    CategoryOption {
        id: ALL_CATEGORIES,
        name: "All Projects",
    },
    CategoryOption {
        id: "web",
        name: "Web Development",
    },
    CategoryOption {
        id: "ecommerce",
        name: "E-Commerce",
    },
    CategoryOption {
        id: "mobile",
        name: "Mobile Apps",
    },
    CategoryOption {
        id: "dashboard",
        name: "Dashboards",
    },
    CategoryOption {
        id: "edtech",
        name: "EdTech",
    },
];

/// A portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: ProjectCategory,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn new(id: &str, title: &str, category: ProjectCategory) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            category,
            technologies: Vec::new(),
            live_url: None,
            featured: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_match_filter_buttons() {
        let categories = [
            ProjectCategory::Web,
            ProjectCategory::Ecommerce,
            ProjectCategory::Mobile,
            ProjectCategory::Dashboard,
            ProjectCategory::Edtech,
        ];
        for category in categories {
            assert!(PORTFOLIO_CATEGORIES.iter().any(|o| o.id == category.as_str()));
        }
        assert_eq!(PORTFOLIO_CATEGORIES[0].id, ALL_CATEGORIES);
        assert_eq!(PORTFOLIO_CATEGORIES.len(), 6);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let yaml = "id: '1'\ntitle: X\ndescription: Y\nimage: /a.jpg\ncategory: webapp\n";
        assert!(serde_yaml::from_str::<Project>(yaml).is_err());

        let yaml = "id: '1'\ntitle: X\ndescription: Y\nimage: /a.jpg\ncategory: all\n";
        assert!(serde_yaml::from_str::<Project>(yaml).is_err());
    }

    #[test]
    fn test_deserialize_project() {
        let yaml = r#"
id: "4"
title: Food Delivery Mobile App
description: Cross-platform app
image: /images/food.jpg
category: mobile
technologies: [React Native, Node.js]
liveUrl: https://example.com
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.category, ProjectCategory::Mobile);
        assert_eq!(project.live_url.as_deref(), Some("https://example.com"));
        assert!(!project.featured);
    }
}
