//! Общие типы и трейты для записей каталогов

pub mod catalog_record;
pub mod category;

// Re-exports
pub use catalog_record::CatalogRecord;
pub use category::{Category, ALL_CATEGORY_ID};
