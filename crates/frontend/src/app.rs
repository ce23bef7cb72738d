use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::load_config;
use contracts::shared::content::SiteContent;
use leptos::prelude::*;

/// Настройки, собранные вместе с бандлом
const SITE_TOML: &str = include_str!("../site.toml");

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(Some(SITE_TOML));

    match SiteContent::load() {
        Ok(content) => {
            // Provide the read-only content and config to the whole app via context.
            provide_context(AppGlobalContext::new(content, config));

            view! {
                <AppRoutes />
            }
            .into_any()
        }
        Err(e) => {
            log::error!("Failed to load site content: {:#}", e);
            view! {
                <div class="error app-error">
                    <h1>"Something went wrong"</h1>
                    <p>{format!("{:#}", e)}</p>
                </div>
            }
            .into_any()
        }
    }
}
