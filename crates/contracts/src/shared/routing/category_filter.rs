//! Фильтр по категории на страницах списков.
//!
//! Активная категория берётся из фрагмента URL (`#architecture`), смена
//! категории проходит через короткое состояние `Filtering`. Каждому выбору
//! выдаётся [`FilterTicket`] с номером поколения; завершение устаревшего
//! тикета игнорируется, поэтому побеждает последний выбор.

use std::sync::Arc;

use crate::domain::common::{CatalogRecord, ALL_CATEGORY_ID};
use crate::shared::catalog::Catalog;

/// Код категории из `location.hash`, если он известен каталогу
pub fn category_from_fragment<T: CatalogRecord>(
    catalog: &Catalog<T>,
    fragment: &str,
) -> Option<String> {
    let id = fragment.trim_start_matches('#');
    if !id.is_empty() && catalog.is_known_category(id) {
        Some(id.to_string())
    } else {
        None
    }
}

/// Фрагмент для `history.replaceState`
pub fn fragment_for(category_id: &str) -> String {
    format!("#{}", category_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTicket {
    generation: u64,
}

impl FilterTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterPhase {
    Filtering,
    Ready,
}

#[derive(Debug)]
pub struct CategoryFilter<T> {
    active: String,
    generation: u64,
    phase: FilterPhase,
    records: Vec<Arc<T>>,
}

impl<T> Clone for CategoryFilter<T> {
    fn clone(&self) -> Self {
        Self {
            active: self.active.clone(),
            generation: self.generation,
            phase: self.phase,
            records: self.records.clone(),
        }
    }
}

impl<T: CatalogRecord> CategoryFilter<T> {
    /// Начальное состояние: категория из фрагмента, иначе "all"
    pub fn from_fragment(catalog: &Catalog<T>, fragment: &str) -> Self {
        let active =
            category_from_fragment(catalog, fragment).unwrap_or_else(|| ALL_CATEGORY_ID.to_string());
        Self {
            records: catalog.by_category(&active),
            active,
            generation: 0,
            phase: FilterPhase::Ready,
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active
    }

    pub fn is_filtering(&self) -> bool {
        self.phase == FilterPhase::Filtering
    }

    /// Записи последней завершённой выборки
    pub fn records(&self) -> &[Arc<T>] {
        &self.records
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Пользователь выбрал категорию. Результат появится после `complete`.
    pub fn select(&mut self, category_id: &str) -> FilterTicket {
        self.generation += 1;
        self.active = category_id.to_string();
        self.phase = FilterPhase::Filtering;
        FilterTicket {
            generation: self.generation,
        }
    }

    /// Завершение отложенной выборки. `false`, если тикет устарел.
    pub fn complete(&mut self, ticket: FilterTicket, catalog: &Catalog<T>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.records = catalog.by_category(&self.active);
        self.phase = FilterPhase::Ready;
        true
    }

    /// Фрагмент URL изменился извне (переход по ссылке `#...`).
    /// Незавершённые выборки при этом отменяются.
    pub fn sync_fragment(&mut self, catalog: &Catalog<T>, fragment: &str) -> bool {
        match category_from_fragment(catalog, fragment) {
            Some(id) if id != self.active || self.is_filtering() => {
                self.generation += 1;
                self.records = catalog.by_category(&id);
                self.active = id;
                self.phase = FilterPhase::Ready;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::aggregate::Project;
    use crate::domain::common::Category;

    fn project(slug: &str, category: &str) -> Project {
        Project {
            id: slug.into(),
            slug: slug.into(),
            title: slug.to_uppercase(),
            category: category.into(),
            image: "/a.jpeg".into(),
            images: vec!["/a.jpeg".into()],
            ..Default::default()
        }
    }

    fn catalog() -> Catalog<Project> {
        Catalog::new(
            vec![
                project("tower", "architecture"),
                project("loft", "interior"),
                project("museum", "architecture"),
            ],
            vec![
                Category::new("architecture", "ARCHITECTURE"),
                Category::new("interior", "INTERIOR"),
            ],
        )
    }

    fn slugs(filter: &CategoryFilter<Project>) -> Vec<&str> {
        filter.records().iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn test_fragment_parsing() {
        let catalog = catalog();
        assert_eq!(
            category_from_fragment(&catalog, "#architecture"),
            Some("architecture".to_string())
        );
        assert_eq!(category_from_fragment(&catalog, "all"), Some("all".to_string()));
        assert_eq!(category_from_fragment(&catalog, "#unknown"), None);
        assert_eq!(category_from_fragment(&catalog, ""), None);
        assert_eq!(category_from_fragment(&catalog, "#"), None);
        assert_eq!(fragment_for("interior"), "#interior");
    }

    #[test]
    fn test_initial_from_fragment() {
        let filter = CategoryFilter::from_fragment(&catalog(), "#architecture");
        assert_eq!(filter.active_category(), "architecture");
        assert!(!filter.is_filtering());
        assert_eq!(slugs(&filter), vec!["tower", "museum"]);
    }

    #[test]
    fn test_initial_defaults_to_all() {
        let filter = CategoryFilter::from_fragment(&catalog(), "#nope");
        assert_eq!(filter.active_category(), "all");
        assert_eq!(filter.records().len(), 3);
    }

    #[test]
    fn test_select_then_complete() {
        let catalog = catalog();
        let mut filter = CategoryFilter::from_fragment(&catalog, "");
        let ticket = filter.select("interior");
        assert!(filter.is_filtering());
        assert_eq!(filter.active_category(), "interior");
        assert!(filter.complete(ticket, &catalog));
        assert!(!filter.is_filtering());
        assert_eq!(slugs(&filter), vec!["loft"]);
    }

    #[test]
    fn test_latest_selection_wins() {
        let catalog = catalog();
        let mut filter = CategoryFilter::from_fragment(&catalog, "");
        let first = filter.select("interior");
        let second = filter.select("architecture");

        // второй завершается раньше первого
        assert!(filter.complete(second, &catalog));
        assert!(!filter.complete(first, &catalog));
        assert_eq!(filter.active_category(), "architecture");
        assert_eq!(slugs(&filter), vec!["tower", "museum"]);
    }

    #[test]
    fn test_stale_ticket_keeps_filtering() {
        let catalog = catalog();
        let mut filter = CategoryFilter::from_fragment(&catalog, "");
        let first = filter.select("interior");
        let _second = filter.select("architecture");
        assert!(!filter.complete(first, &catalog));
        assert!(filter.is_filtering());
    }

    #[test]
    fn test_sync_fragment_cancels_pending() {
        let catalog = catalog();
        let mut filter = CategoryFilter::from_fragment(&catalog, "");
        let ticket = filter.select("interior");
        assert!(filter.sync_fragment(&catalog, "#architecture"));
        assert!(!filter.complete(ticket, &catalog));
        assert_eq!(filter.active_category(), "architecture");
        assert!(!filter.sync_fragment(&catalog, "#architecture"));
        assert!(!filter.sync_fragment(&catalog, "#unknown"));
    }
}
