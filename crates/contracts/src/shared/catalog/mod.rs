//! Catalog Store и селекторы.
//!
//! Каталог создаётся один раз при старте и дальше только читается.
//! Все селекторы чистые: повторный вызов даёт тот же результат, записи
//! отдаются через `Arc` без копирования.

pub mod error;

use std::collections::HashSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::common::{CatalogRecord, Category, ALL_CATEGORY_ID};

pub use error::ContentError;

/// Формат JSON-документа каталога
#[derive(Debug, Deserialize)]
struct CatalogDocument<T> {
    categories: Vec<Category>,
    records: Vec<T>,
}

/// Неизменяемая коллекция записей + индекс категорий
#[derive(Debug)]
pub struct Catalog<T> {
    records: Vec<Arc<T>>,
    categories: Vec<Category>,
}

impl<T> Clone for Catalog<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            categories: self.categories.clone(),
        }
    }
}

impl<T: CatalogRecord> Catalog<T> {
    pub fn new(records: Vec<T>, categories: Vec<Category>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
            categories,
        }
    }

    /// Разбор документа `{ "categories": [...], "records": [...] }`
    pub fn from_json(json: &str) -> Result<Self, ContentError>
    where
        T: DeserializeOwned,
    {
        let doc: CatalogDocument<T> = serde_json::from_str(json)?;
        Ok(Self::new(doc.records, doc.categories))
    }

    /// Все записи в порядке авторинга
    pub fn records(&self) -> &[Arc<T>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ------------------------------------------------------------------
    // Category Index
    // ------------------------------------------------------------------

    /// Категории в порядке авторинга, без синтетической "all"
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Категории для панели фильтра: "all" первой, дальше индекс
    pub fn categories_with_all(&self, all_label: &str) -> Vec<Category> {
        std::iter::once(Category::all(all_label))
            .chain(self.categories.iter().cloned())
            .collect()
    }

    /// `"all"` или код из индекса
    pub fn is_known_category(&self, id: &str) -> bool {
        id == ALL_CATEGORY_ID || self.categories.iter().any(|c| c.id == id)
    }

    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    /// Записи категории; для `"all"` весь каталог в исходном порядке
    pub fn by_category(&self, category_id: &str) -> Vec<Arc<T>> {
        if category_id == ALL_CATEGORY_ID {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|r| r.category() == category_id)
            .cloned()
            .collect()
    }

    pub fn by_slug(&self, slug: &str) -> Option<Arc<T>> {
        self.records.iter().find(|r| r.slug() == slug).cloned()
    }

    pub fn featured(&self) -> Vec<Arc<T>> {
        self.records
            .iter()
            .filter(|r| r.is_featured())
            .cloned()
            .collect()
    }

    /// Коды категорий, реально встречающиеся в данных (порядок первого появления)
    pub fn distinct_categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.category())
            .filter(|c| seen.insert(*c))
            .map(str::to_string)
            .collect()
    }

    /// Записи той же категории, кроме самой записи
    pub fn related(&self, record: &T, limit: usize) -> Vec<Arc<T>> {
        self.records
            .iter()
            .filter(|r| r.category() == record.category() && r.id() != record.id())
            .take(limit)
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Drift diagnostics
    // ------------------------------------------------------------------

    /// Записи, категория которых отсутствует в индексе
    pub fn orphaned_records(&self) -> Vec<Arc<T>> {
        self.records
            .iter()
            .filter(|r| !self.categories.iter().any(|c| c.id == r.category()))
            .cloned()
            .collect()
    }

    /// Категории индекса без единой записи
    pub fn empty_categories(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| !self.records.iter().any(|r| r.category() == c.id))
            .collect()
    }

    /// Проверка данных, собранных при авторинге
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.is_all() {
                return Err(ContentError::ReservedCategory(category.id.clone()));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(ContentError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for record in &self.records {
            let id = record.id();
            if id.trim().is_empty() {
                return Err(ContentError::MissingField {
                    id: record.slug().to_string(),
                    field: "id",
                });
            }
            for (field, value) in [
                ("slug", record.slug()),
                ("title", record.title()),
                ("category", record.category()),
                ("image", record.image()),
            ] {
                if value.trim().is_empty() {
                    return Err(ContentError::MissingField {
                        id: id.to_string(),
                        field,
                    });
                }
            }
            if record.images().is_empty() {
                return Err(ContentError::EmptyImages(id.to_string()));
            }
            if !ids.insert(id) {
                return Err(ContentError::DuplicateId(id.to_string()));
            }
            if !slugs.insert(record.slug()) {
                return Err(ContentError::DuplicateSlug(record.slug().to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_service::aggregate::Service;

    fn service(slug: &str, category: &str, featured: bool) -> Service {
        Service {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            category: category.to_string(),
            description: format!("{} description", slug),
            image: format!("/assets/{}.jpeg", slug),
            images: vec![format!("/assets/{}.jpeg", slug)],
            featured,
            ..Default::default()
        }
    }

    fn fixture() -> Catalog<Service> {
        Catalog::new(
            vec![
                service("interior-design", "design", true),
                service("brand-identity", "branding", true),
                service("space-planning", "design", false),
                service("site-audit", "consulting", false),
            ],
            vec![
                Category::new("design", "DESIGN SERVICES"),
                Category::new("branding", "BRANDING"),
                Category::new("consulting", "CONSULTING"),
            ],
        )
    }

    fn slugs(records: &[Arc<Service>]) -> Vec<&str> {
        records.iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn test_by_category_filters_exactly() {
        let catalog = fixture();
        for category in catalog.list_categories() {
            let records = catalog.by_category(&category.id);
            assert!(records.iter().all(|r| r.category == category.id));
        }
        assert_eq!(
            slugs(&catalog.by_category("design")),
            vec!["interior-design", "space-planning"]
        );
    }

    #[test]
    fn test_by_category_all_preserves_order() {
        let catalog = fixture();
        let all = catalog.by_category(ALL_CATEGORY_ID);
        assert_eq!(all.len(), catalog.len());
        assert_eq!(slugs(&all), slugs(catalog.records()));
    }

    #[test]
    fn test_by_category_unknown_is_empty() {
        assert!(fixture().by_category("landscape").is_empty());
    }

    #[test]
    fn test_by_slug() {
        let catalog = fixture();
        for record in catalog.records() {
            let found = catalog.by_slug(&record.slug).unwrap();
            assert_eq!(found.slug, record.slug);
        }
        assert!(catalog.by_slug("nonexistent-xyz").is_none());
    }

    #[test]
    fn test_by_slug_shares_record() {
        let catalog = fixture();
        let found = catalog.by_slug("brand-identity").unwrap();
        assert!(Arc::ptr_eq(&found, &catalog.records()[1]));
    }

    #[test]
    fn test_featured_is_pure_subset() {
        let catalog = fixture();
        let first = catalog.featured();
        let second = catalog.featured();
        assert!(first.iter().all(|r| r.featured));
        assert_eq!(slugs(&first), vec!["interior-design", "brand-identity"]);
        assert_eq!(slugs(&first), slugs(&second));
    }

    #[test]
    fn test_distinct_categories() {
        assert_eq!(
            fixture().distinct_categories(),
            vec!["design", "branding", "consulting"]
        );
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = fixture();
        let record = catalog.by_slug("interior-design").unwrap();
        let related = catalog.related(&record, 3);
        assert_eq!(slugs(&related), vec!["space-planning"]);
        assert!(catalog.related(&record, 0).is_empty());
    }

    #[test]
    fn test_related_capped_by_limit() {
        let records: Vec<Service> = (0..5)
            .map(|i| service(&format!("design-{}", i), "design", false))
            .collect();
        let catalog = Catalog::new(records, vec![Category::new("design", "DESIGN")]);
        let record = catalog.by_slug("design-0").unwrap();

        let related = catalog.related(&record, 3);
        assert_eq!(slugs(&related), vec!["design-1", "design-2", "design-3"]);
        assert_eq!(catalog.related(&record, 10).len(), 4);
    }

    #[test]
    fn test_categories_with_all() {
        let categories = fixture().categories_with_all("ALL SERVICES");
        assert_eq!(categories.len(), 4);
        assert!(categories[0].is_all());
        assert_eq!(categories[0].name, "ALL SERVICES");
        assert_eq!(categories[1].id, "design");
    }

    #[test]
    fn test_known_category() {
        let catalog = fixture();
        assert!(catalog.is_known_category("all"));
        assert!(catalog.is_known_category("branding"));
        assert!(!catalog.is_known_category("marketing"));
        assert_eq!(catalog.category_name("branding"), Some("BRANDING"));
        assert_eq!(catalog.category_name("marketing"), None);
    }

    #[test]
    fn test_drift_diagnostics() {
        let mut records = vec![service("a", "design", false)];
        records.push(service("b", "marketing", false));
        let catalog = Catalog::new(
            records,
            vec![
                Category::new("design", "DESIGN"),
                Category::new("management", "MANAGEMENT"),
            ],
        );
        assert_eq!(slugs(&catalog.orphaned_records()), vec!["b"]);
        let empty: Vec<&str> = catalog
            .empty_categories()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(empty, vec!["management"]);
        // "b" не попадает ни в одну группу, но виден через "all"
        assert_eq!(catalog.by_category("all").len(), 2);
    }

    #[test]
    fn test_validate_ok() {
        assert!(fixture().validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_slug() {
        let mut dup = service("interior-design", "design", false);
        dup.id = "other-id".into();
        let catalog = Catalog::new(
            vec![service("interior-design", "design", false), dup],
            vec![Category::new("design", "DESIGN")],
        );
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::DuplicateSlug(slug)) if slug == "interior-design"
        ));
    }

    #[test]
    fn test_validate_empty_images() {
        let mut record = service("x", "design", false);
        record.images.clear();
        let catalog = Catalog::new(vec![record], vec![Category::new("design", "DESIGN")]);
        assert!(matches!(catalog.validate(), Err(ContentError::EmptyImages(_))));
    }

    #[test]
    fn test_validate_reserved_category() {
        let catalog = Catalog::new(
            vec![service("x", "design", false)],
            vec![Category::all("ALL")],
        );
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::ReservedCategory(_))
        ));
    }

    #[test]
    fn test_from_json_parse_error() {
        let result = Catalog::<Service>::from_json("{ not json");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}
