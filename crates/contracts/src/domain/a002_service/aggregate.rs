use serde::{Deserialize, Serialize};

use crate::domain::common::CatalogRecord;

// ============================================================================
// Aggregate
// ============================================================================

/// Услуга студии
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,

    #[serde(default)]
    pub icon: Option<String>,

    pub description: String,

    #[serde(default)]
    pub full_description: String,

    /// Шаги процесса, в порядке выполнения
    #[serde(default)]
    pub process: Vec<String>,

    #[serde(default)]
    pub benefits: Vec<String>,

    pub image: String,
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub team: Vec<String>,

    #[serde(default)]
    pub featured: bool,

    /// "$$", "$$$" ...
    #[serde(default)]
    pub price_range: Option<String>,

    #[serde(default)]
    pub deliverables: Vec<String>,
}

impl Service {
    pub fn team_size_label(&self) -> String {
        format!("{} specialists", self.team.len())
    }

    /// Шаги процесса с номерами "01", "02", ...
    pub fn numbered_process(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.process
            .iter()
            .enumerate()
            .map(|(i, step)| (format!("{:02}", i + 1), step.as_str()))
    }

    /// Второе изображение галереи для блока преимуществ, иначе основное
    pub fn secondary_image(&self) -> &str {
        self.images.get(1).map(String::as_str).unwrap_or(&self.image)
    }
}

impl CatalogRecord for Service {
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
    fn test_numbered_process() {
        let service = Service {
            process: vec!["Research".into(), "Design".into()],
            ..Default::default()
        };
        let steps: Vec<_> = service.numbered_process().collect();
        assert_eq!(steps[0], ("01".to_string(), "Research"));
        assert_eq!(steps[1], ("02".to_string(), "Design"));
    }

    #[test]
    fn test_secondary_image_fallback() {
        let mut service = Service {
            image: "/main.jpeg".into(),
            images: vec!["/main.jpeg".into()],
            ..Default::default()
        };
        assert_eq!(service.secondary_image(), "/main.jpeg");

        service.images.push("/second.jpeg".into());
        assert_eq!(service.secondary_image(), "/second.jpeg");
    }

    #[test]
    fn test_team_size_label() {
        let service = Service {
            team: vec!["Lead".into(), "Planner".into(), "Specialist".into()],
            ..Default::default()
        };
        assert_eq!(service.team_size_label(), "3 specialists");
    }
}
