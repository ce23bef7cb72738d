use serde::{Deserialize, Serialize};

/// Зарезервированный код категории "все записи"
pub const ALL_CATEGORY_ID: &str = "all";

/// Категория каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Синтетическая категория "все", добавляется страницей списка
    pub fn all(label: impl Into<String>) -> Self {
        Self::new(ALL_CATEGORY_ID, label)
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}
