use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_service::aggregate::Service;
use contracts::shared::catalog::Catalog;
use contracts::shared::config::SiteConfig;
use contracts::shared::content::SiteContent;
use leptos::prelude::*;

/// Глобальный контекст сайта.
///
/// Контент и настройки неизменяемы и живут всё время работы приложения;
/// из изменяемого тут только состояние мобильного меню.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub content: StoredValue<SiteContent>,
    pub config: StoredValue<SiteConfig>,
    pub menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(content: SiteContent, config: SiteConfig) -> Self {
        Self {
            content: StoredValue::new(content),
            config: StoredValue::new(config),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

/// Каталог, с которым работает страница
pub type CatalogOf<T> = fn(&SiteContent) -> &Catalog<T>;

pub fn project_catalog(content: &SiteContent) -> &Catalog<Project> {
    &content.projects
}

pub fn service_catalog(content: &SiteContent) -> &Catalog<Service> {
    &content.services
}
