use serde::{Deserialize, Serialize};

/// Каталоги сайта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    Projects,
    Services,
}

impl CatalogKind {
    /// Путь страницы списка
    pub fn list_path(&self) -> &'static str {
        match self {
            CatalogKind::Projects => "/projects",
            CatalogKind::Services => "/services",
        }
    }

    pub fn detail_path(&self, slug: &str) -> String {
        format!("{}/{}", self.list_path(), slug)
    }

    /// Подпись синтетической категории "все" на странице списка
    pub fn all_label(&self) -> &'static str {
        match self {
            CatalogKind::Projects => "ALL",
            CatalogKind::Services => "ALL SERVICES",
        }
    }

    /// Человекочитаемое название записи в единственном числе
    pub fn record_name(&self) -> &'static str {
        match self {
            CatalogKind::Projects => "Project",
            CatalogKind::Services => "Service",
        }
    }

    /// Текст под пустой сеткой списка
    pub fn empty_category_message(&self) -> &'static str {
        match self {
            CatalogKind::Projects => "No projects in this category yet.",
            CatalogKind::Services => "No services in this category yet.",
        }
    }
}
