use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::enums::catalog_kind::CatalogKind;
use leptos::prelude::*;

/// Избранные проекты на главной
#[component]
#[allow(non_snake_case)]
pub fn FeaturedProjects() -> impl IntoView {
    let ctx = use_global_context();
    let featured = ctx.content.with_value(|c| c.projects.featured());

    view! {
        <section class="featured-projects">
            <div class="section-heading">
                <span class="section-heading__eyebrow">"Selected work"</span>
                <h2>"FEATURED PROJECTS"</h2>
            </div>
            <div class="featured-projects__list">
                {featured
                    .into_iter()
                    .map(|project| {
                        let href = CatalogKind::Projects.detail_path(&project.slug);
                        view! {
                            <a href=href class="featured-project">
                                <img src=project.image.clone() alt=project.title.clone() loading="lazy" />
                                <div class="featured-project__caption">
                                    <span>{project.category_label()}</span>
                                    <h3>{project.title.clone()}</h3>
                                    <span class="featured-project__year">{project.year_label()}</span>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <a href=CatalogKind::Projects.list_path() class="section-link">
                <span>"View all projects"</span>
                {icon("arrow-right")}
            </a>
        </section>
    }
}
