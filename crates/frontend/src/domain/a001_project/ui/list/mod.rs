pub mod card;

use self::card::ProjectCard;
use crate::layout::global_context::{project_catalog, use_global_context};
use crate::shared::components::category_bar::CategoryBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::filters::use_category_filter;
use crate::shared::viewport::use_viewport_class;
use contracts::enums::catalog_kind::CatalogKind;
use contracts::shared::layout_expander::{LayoutExpander, Padding};
use leptos::prelude::*;
use thaw::Spinner;

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let ctx = use_global_context();
    let (state, select) = use_category_filter(project_catalog);
    let viewport = use_viewport_class();

    let (expander, target_count) = ctx.config.with_value(|c| {
        (
            LayoutExpander::new(c.layout.row_unit_px),
            c.layout.target_card_count,
        )
    });
    let categories = ctx.content.with_value(|c| {
        c.projects
            .categories_with_all(CatalogKind::Projects.all_label())
    });

    let active = Signal::derive(move || state.with(|f| f.active_category().to_string()));
    let is_filtering = move || state.with(|f| f.is_filtering());

    // Сетка перестраивается целиком при смене категории или класса вьюпорта
    let cards = move || {
        let viewport = viewport.get();
        state.with(|f| {
            expander
                .expand(f.records(), viewport, Padding::ToCount(target_count))
                .into_iter()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="projects-page">
            <PageHeader title="PROJECTS" eyebrow="Portfolio">
                <CategoryBar categories=categories active=active on_select=select />
            </PageHeader>

            <Show
                when=is_filtering
                fallback=move || view! {
                    <div class=move || format!("projects-grid projects-grid-{}", viewport.get().code())>
                        <For
                            each=cards
                            key=|(_, card)| format!("{}-{}", card.unique_key, card.variant.code())
                            children=move |(index, card)| view! { <ProjectCard card=card index=index /> }
                        />
                    </div>
                }
            >
                <div class="projects-loading">
                    <Spinner />
                </div>
            </Show>

            {move || {
                let empty = state.with(|f| !f.is_filtering() && f.records().is_empty());
                empty.then(|| view! {
                    <p class="projects-empty">{CatalogKind::Projects.empty_category_message()}</p>
                })
            }}
        </section>
    }
}
