use crate::layout::global_context::use_global_context;
use contracts::domain::a002_service::aggregate::Service;
use contracts::enums::catalog_kind::CatalogKind;
use leptos::prelude::*;
use std::sync::Arc;

/// Другие услуги той же категории
#[component]
pub fn RelatedServices(service: Arc<Service>) -> impl IntoView {
    let ctx = use_global_context();
    let limit = ctx.config.with_value(|c| c.catalog.related_limit);
    let related = ctx.content.with_value(|c| c.services.related(&service, limit));

    (!related.is_empty()).then(|| {
        view! {
            <section class="related-services">
                <h2>"Related Services"</h2>
                <div class="related-services__grid">
                    {related
                        .into_iter()
                        .map(|s| view! {
                            <a href=CatalogKind::Services.detail_path(&s.slug) class="related-service">
                                <img src=s.image.clone() alt=s.title.clone() loading="lazy" />
                                <h3>{s.title.clone()}</h3>
                                <p>{s.description.clone()}</p>
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>
        }
    })
}
