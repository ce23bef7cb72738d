use thiserror::Error;

/// Ошибки авторинга/загрузки контента.
///
/// Отсутствие записи по slug ошибкой не является и сюда не попадает:
/// селекторы возвращают `None`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate slug `{0}`")]
    DuplicateSlug(String),

    #[error("duplicate record id `{0}`")]
    DuplicateId(String),

    #[error("duplicate category `{0}`")]
    DuplicateCategory(String),

    #[error("category id `{0}` is reserved")]
    ReservedCategory(String),

    #[error("record `{0}` has no images")]
    EmptyImages(String),

    #[error("record `{id}` is missing required field `{field}`")]
    MissingField { id: String, field: &'static str },
}
