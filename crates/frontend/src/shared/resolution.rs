use crate::layout::global_context::{use_global_context, CatalogOf};
use contracts::domain::common::CatalogRecord;
use contracts::shared::routing::{resolve_slug, Resolution};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Запись детальной страницы по `:slug` из адреса.
/// Начинается с `Loading`, пересчитывается при смене slug.
pub fn use_slug_resolution<T>(catalog_of: CatalogOf<T>) -> RwSignal<Resolution<T>>
where
    T: CatalogRecord + Send + Sync + 'static,
{
    let ctx = use_global_context();
    let params = use_params_map();
    let resolution = RwSignal::new(Resolution::Loading);

    Effect::new(move |_| {
        let slug = params.read().get("slug").unwrap_or_default();
        let next = ctx.content.with_value(|c| resolve_slug(catalog_of(c), &slug));
        resolution.set(next);
    });

    resolution
}
