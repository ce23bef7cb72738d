use std::sync::Arc;

use crate::domain::common::CatalogRecord;
use crate::enums::catalog_kind::CatalogKind;
use crate::shared::catalog::Catalog;

/// Состояние детальной страницы
#[derive(Debug)]
pub enum Resolution<T> {
    Loading,
    Found(Arc<T>),
    NotFound { slug: String },
}

impl<T> Clone for Resolution<T> {
    fn clone(&self) -> Self {
        match self {
            Resolution::Loading => Resolution::Loading,
            Resolution::Found(record) => Resolution::Found(Arc::clone(record)),
            Resolution::NotFound { slug } => Resolution::NotFound { slug: slug.clone() },
        }
    }
}

impl<T> Resolution<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resolution::Loading)
    }

    pub fn record(&self) -> Option<&Arc<T>> {
        match self {
            Resolution::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Что делать странице, если запись не найдена
    pub fn not_found_action(&self, policy: &dyn NotFoundPolicy) -> Option<NotFoundAction> {
        match self {
            Resolution::NotFound { slug } => Some(policy.on_not_found(slug)),
            _ => None,
        }
    }
}

/// Переход `Loading -> Found | NotFound`
pub fn resolve_slug<T: CatalogRecord>(catalog: &Catalog<T>, slug: &str) -> Resolution<T> {
    match catalog.by_slug(slug) {
        Some(record) => Resolution::Found(record),
        None => {
            log::debug!("slug `{}` did not resolve", slug);
            Resolution::NotFound {
                slug: slug.to_string(),
            }
        }
    }
}

/// Единый исход "запись не найдена", конкретная реакция выбирается страницей
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundAction {
    /// Уйти на другую страницу (списки услуг)
    Redirect { to: String },
    /// Показать сообщение со ссылкой назад (проекты)
    Inline {
        message: String,
        back_href: String,
        back_label: String,
    },
}

pub trait NotFoundPolicy {
    fn on_not_found(&self, slug: &str) -> NotFoundAction;
}

/// Редирект на страницу списка каталога
#[derive(Debug, Clone, Copy)]
pub struct RedirectToList(pub CatalogKind);

impl NotFoundPolicy for RedirectToList {
    fn on_not_found(&self, _slug: &str) -> NotFoundAction {
        NotFoundAction::Redirect {
            to: self.0.list_path().to_string(),
        }
    }
}

/// Сообщение "... Not Found" со ссылкой на список
#[derive(Debug, Clone, Copy)]
pub struct InlineNotFound(pub CatalogKind);

impl NotFoundPolicy for InlineNotFound {
    fn on_not_found(&self, _slug: &str) -> NotFoundAction {
        let kind = self.0;
        let plural = match kind {
            CatalogKind::Projects => "Projects",
            CatalogKind::Services => "Services",
        };
        NotFoundAction::Inline {
            message: format!("{} Not Found", kind.record_name()),
            back_href: kind.list_path().to_string(),
            back_label: format!("Back to {}", plural),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::aggregate::Project;
    use crate::domain::common::Category;

    fn catalog() -> Catalog<Project> {
        Catalog::new(
            vec![Project {
                id: "1".into(),
                slug: "desert-villa".into(),
                title: "DESERT VILLA".into(),
                category: "residential".into(),
                image: "/a.jpeg".into(),
                images: vec!["/a.jpeg".into()],
                ..Default::default()
            }],
            vec![Category::new("residential", "RESIDENTIAL")],
        )
    }

    #[test]
    fn test_resolve_found() {
        let resolution = resolve_slug(&catalog(), "desert-villa");
        assert_eq!(resolution.record().unwrap().title, "DESERT VILLA");
        assert!(resolution
            .not_found_action(&InlineNotFound(CatalogKind::Projects))
            .is_none());
    }

    #[test]
    fn test_not_found_inline_for_projects() {
        let resolution = resolve_slug(&catalog(), "does-not-exist");
        assert!(resolution.record().is_none());
        let action = resolution
            .not_found_action(&InlineNotFound(CatalogKind::Projects))
            .unwrap();
        assert_eq!(
            action,
            NotFoundAction::Inline {
                message: "Project Not Found".into(),
                back_href: "/projects".into(),
                back_label: "Back to Projects".into(),
            }
        );
    }

    #[test]
    fn test_not_found_redirect_for_services() {
        let resolution: Resolution<Project> = Resolution::NotFound {
            slug: "x".into(),
        };
        let action = resolution
            .not_found_action(&RedirectToList(CatalogKind::Services))
            .unwrap();
        assert_eq!(
            action,
            NotFoundAction::Redirect {
                to: "/services".into()
            }
        );
    }

    #[test]
    fn test_loading_has_no_action() {
        let resolution: Resolution<Project> = Resolution::Loading;
        assert!(resolution.is_loading());
        assert!(resolution
            .not_found_action(&RedirectToList(CatalogKind::Services))
            .is_none());
    }
}
