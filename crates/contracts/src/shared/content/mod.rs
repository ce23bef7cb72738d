//! Статический контент сайта.
//!
//! Таблицы лежат рядом в `data/*.json`, встраиваются в бинарник и
//! разбираются один раз при старте. Дальше `SiteContent` только читается
//! и передаётся страницам через контекст.

use std::sync::Arc;

use anyhow::Context;

use crate::domain::a001_project::aggregate::Project;
use crate::domain::a002_service::aggregate::Service;
use crate::domain::a003_branch::aggregate::Branch;
use crate::domain::common::CatalogRecord;
use crate::shared::catalog::{Catalog, ContentError};

const PROJECTS_JSON: &str = include_str!("data/projects.json");
const SERVICES_JSON: &str = include_str!("data/services.json");
const BRANCHES_JSON: &str = include_str!("data/branches.json");

#[derive(Debug, Clone)]
pub struct SiteContent {
    pub projects: Arc<Catalog<Project>>,
    pub services: Arc<Catalog<Service>>,
    pub branches: Arc<Vec<Branch>>,
}

impl SiteContent {
    /// Встроенный контент
    pub fn load() -> anyhow::Result<Self> {
        Self::from_sources(PROJECTS_JSON, SERVICES_JSON, BRANCHES_JSON)
    }

    pub fn from_sources(projects: &str, services: &str, branches: &str) -> anyhow::Result<Self> {
        let projects = load_catalog::<Project>("projects", projects)?;
        let services = load_catalog::<Service>("services", services)?;
        let branches: Vec<Branch> = serde_json::from_str(branches)
            .map_err(ContentError::from)
            .context("branches table")?;

        log::info!(
            "Content loaded: {} projects, {} services, {} branches",
            projects.len(),
            services.len(),
            branches.len()
        );

        Ok(Self {
            projects: Arc::new(projects),
            services: Arc::new(services),
            branches: Arc::new(branches),
        })
    }
}

fn load_catalog<T>(name: &str, json: &str) -> anyhow::Result<Catalog<T>>
where
    T: CatalogRecord + serde::de::DeserializeOwned,
{
    let catalog = Catalog::<T>::from_json(json).with_context(|| format!("{} catalog", name))?;
    catalog
        .validate()
        .with_context(|| format!("{} catalog failed validation", name))?;
    report_drift(name, &catalog);
    Ok(catalog)
}

/// Расхождения индекса категорий и данных не исправляются, только логируются
fn report_drift<T: CatalogRecord>(name: &str, catalog: &Catalog<T>) {
    for record in catalog.orphaned_records() {
        log::warn!(
            "{}: record `{}` has category `{}` missing from the category index",
            name,
            record.slug(),
            record.category()
        );
    }
    for category in catalog.empty_categories() {
        log::warn!("{}: category `{}` has no records", name, category.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ALL_CATEGORY_ID;
    use crate::enums::viewport_class::ViewportClass;
    use crate::shared::layout_expander::{LayoutExpander, Padding};
    use crate::shared::routing::CategoryFilter;

    fn content() -> SiteContent {
        SiteContent::load().expect("embedded content must be valid")
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = content();
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.branches.len(), 6);
        assert!(!content.projects.is_empty());
        assert!(content.projects.orphaned_records().is_empty());
        assert!(content.services.empty_categories().is_empty());
    }

    #[test]
    fn test_services_by_category_design() {
        let design = content().services.by_category("design");
        let slugs: Vec<&str> = design.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["interior-design"]);
    }

    #[test]
    fn test_services_by_slug() {
        let content = content();
        let service = content.services.by_slug("brand-identity").unwrap();
        assert_eq!(service.title, "BRAND IDENTITY");
        assert!(content.services.by_slug("does-not-exist").is_none());
    }

    #[test]
    fn test_featured_services() {
        let featured = content().services.featured();
        let slugs: Vec<&str> = featured.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "interior-design",
                "architectural-planning",
                "brand-identity",
                "sustainable-design"
            ]
        );
    }

    #[test]
    fn test_every_project_category_partitions() {
        let content = content();
        let total: usize = content
            .projects
            .list_categories()
            .iter()
            .map(|c| content.projects.by_category(&c.id).len())
            .sum();
        assert_eq!(total, content.projects.by_category(ALL_CATEGORY_ID).len());
    }

    #[test]
    fn test_architecture_fragment_scenario() {
        let content = content();
        let filter = CategoryFilter::from_fragment(&content.projects, "#architecture");
        assert_eq!(filter.active_category(), "architecture");
        assert!(!filter.records().is_empty());
        assert!(filter
            .records()
            .iter()
            .all(|p| p.category == "architecture"));
    }

    #[test]
    fn test_projects_grid_padding() {
        let content = content();
        let records = content.projects.by_category("residential");
        let cards = LayoutExpander::default().expand(
            &records,
            ViewportClass::Desktop,
            Padding::ToCount(12),
        );
        assert_eq!(cards.len(), 12);
        assert!(cards.iter().all(|c| c.record.category == "residential"));
    }

    #[test]
    fn test_bad_source_reports_context() {
        let err = SiteContent::from_sources("[]", SERVICES_JSON, BRANCHES_JSON).unwrap_err();
        assert_eq!(err.to_string(), "projects catalog");
    }
}
