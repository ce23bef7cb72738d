use serde::{Deserialize, Serialize};

use crate::domain::common::CatalogRecord;

// ============================================================================
// Aggregate
// ============================================================================

/// Проект из портфолио студии
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,

    #[serde(default)]
    pub full_description: String,

    pub image: String,
    pub images: Vec<String>,

    #[serde(default)]
    pub year: Option<u16>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub area: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Метка категории для карточек и мета-блока ("ARCHITECTURE")
    pub fn category_label(&self) -> String {
        self.category.to_uppercase()
    }

    pub fn year_label(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }
}

impl CatalogRecord for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn images(&self) -> &[String] {
        &self.images
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "p1",
            "slug": "villa",
            "title": "VILLA",
            "category": "residential",
            "description": "d",
            "fullDescription": "full",
            "image": "/a.jpeg",
            "images": ["/a.jpeg"],
            "year": 2023
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.full_description, "full");
        assert_eq!(project.year, Some(2023));
        assert!(!project.featured);
        assert!(project.tags.is_empty());
        assert_eq!(project.category_label(), "RESIDENTIAL");
    }
}
