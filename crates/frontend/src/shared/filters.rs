//! Фильтр по категории для страниц списков (проекты, услуги).
use crate::layout::global_context::{use_global_context, CatalogOf};
use crate::shared::url_fragment::{current_fragment, replace_fragment};
use contracts::domain::common::CatalogRecord;
use contracts::shared::routing::{fragment_for, CategoryFilter};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Состояние фильтра и обработчик выбора категории.
///
/// Категория читается из `location.hash` при монтировании. Выбор проходит через
/// задержку `filter_delay_ms`; если за это время выбрали другую категорию,
/// результат старого выбора отбрасывается.
pub fn use_category_filter<T>(catalog_of: CatalogOf<T>) -> (RwSignal<CategoryFilter<T>>, Callback<String>)
where
    T: CatalogRecord + Send + Sync + 'static,
{
    let ctx = use_global_context();
    let delay_ms = ctx.config.with_value(|c| c.catalog.filter_delay_ms);

    let initial = ctx
        .content
        .with_value(|c| CategoryFilter::from_fragment(catalog_of(c), &current_fragment()));
    let state = RwSignal::new(initial);

    let select = Callback::new(move |category_id: String| {
        let Some(ticket) = state.try_update(|f| f.select(&category_id)) else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;

            // Страница могла быть закрыта, пока шла задержка
            let applied = state
                .try_update(|f| ctx.content.with_value(|c| f.complete(ticket, catalog_of(c))))
                .unwrap_or(false);

            if applied {
                replace_fragment(&fragment_for(&category_id));
            } else {
                log::debug!(
                    "filter `{}` (generation {}) superseded",
                    category_id,
                    ticket.generation()
                );
            }
        });
    });

    // Переход по ссылке вида `#interior` на уже открытой странице
    let handle = window_event_listener(ev::hashchange, move |_| {
        let fragment = current_fragment();
        let changed = state
            .try_update(|f| ctx.content.with_value(|c| f.sync_fragment(catalog_of(c), &fragment)))
            .unwrap_or(false);
        if changed {
            log::debug!("category synced from url fragment {}", fragment);
        }
    });
    on_cleanup(move || handle.remove());

    (state, select)
}
