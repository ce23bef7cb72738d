use crate::layout::global_context::{service_catalog, use_global_context};
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::category_bar::CategoryBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::filters::use_category_filter;
use crate::shared::icons::icon;
use crate::shared::viewport::use_viewport_class;
use contracts::domain::a002_service::aggregate::Service;
use contracts::enums::catalog_kind::CatalogKind;
use contracts::shared::layout_expander::{ExpandedCard, LayoutExpander, Padding};
use leptos::prelude::*;
use thaw::Spinner;

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let ctx = use_global_context();
    let (state, select) = use_category_filter(service_catalog);
    let viewport = use_viewport_class();

    let expander = ctx
        .config
        .with_value(|c| LayoutExpander::new(c.layout.row_unit_px));
    let categories = ctx.content.with_value(|c| {
        c.services
            .categories_with_all(CatalogKind::Services.all_label())
    });
    let tagline = ctx.config.with_value(|c| c.studio.tagline.clone());

    let active = Signal::derive(move || state.with(|f| f.active_category().to_string()));

    // Услуги не дублируются: одна карточка на запись
    let cards = move || {
        let viewport = viewport.get();
        state.with(|f| {
            expander
                .expand(f.records(), viewport, Padding::None)
                .into_iter()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="services-page">
            <PageHeader title="SERVICES" eyebrow="What we do" subtitle=tagline>
                <CategoryBar categories=categories active=active on_select=select />
            </PageHeader>

            <Show
                when=move || state.with(|f| f.is_filtering())
                fallback=move || view! {
                    <div class="services-grid">
                        <For
                            each=cards
                            key=|(_, card)| format!("{}-{}", card.unique_key, card.variant.code())
                            children=move |(index, card)| view! { <ServiceCard card=card index=index /> }
                        />
                    </div>
                }
            >
                <div class="services-loading">
                    <Spinner />
                </div>
            </Show>

            {move || {
                let empty = state.with(|f| !f.is_filtering() && f.records().is_empty());
                empty.then(|| view! {
                    <p class="services-empty">{CatalogKind::Services.empty_category_message()}</p>
                })
            }}
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn ServiceCard(card: ExpandedCard<Service>, index: usize) -> impl IntoView {
    let service = card.record;
    let href = CatalogKind::Services.detail_path(&service.slug);

    view! {
        <div class=format!("service-card service-card-{}", card.variant.code())>
            <CardAnimated delay_ms=stagger_delay(index)>
                <a href=href class="service-card__link">
                    <div class="service-card__image">
                        <img src=service.image.clone() alt=service.title.clone() loading="lazy" />
                    </div>
                    <div class="service-card__body">
                        <span class="service-card__icon">{service.icon.clone().unwrap_or_default()}</span>
                        <h3 class="service-card__title">{service.title.clone()}</h3>
                        <p class="service-card__description">{service.description.clone()}</p>
                        <span class="service-card__more">
                            "Learn more"
                            {icon("arrow-right")}
                        </span>
                    </div>
                </a>
            </CardAnimated>
        </div>
    }
}
