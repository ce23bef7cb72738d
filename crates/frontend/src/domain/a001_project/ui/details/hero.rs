use crate::layout::global_context::use_global_context;
use crate::shared::carousel::use_carousel;
use contracts::domain::a001_project::aggregate::Project;
use leptos::prelude::*;
use std::sync::Arc;

/// Полноэкранный фон с перебором изображений проекта
#[component]
pub fn ProjectHero(project: Arc<Project>) -> impl IntoView {
    let ctx = use_global_context();
    let interval_ms = ctx.config.with_value(|c| c.carousel.detail_interval_ms);
    let carousel = use_carousel(project.images.len(), interval_ms);

    view! {
        <header class="project-hero">
            {project
                .images
                .iter()
                .enumerate()
                .map(|(i, src)| {
                    let style = format!("background-image: url('{}');", src);
                    view! {
                        <div
                            class=move || {
                                if carousel.with(|c| c.current() == i) {
                                    "project-hero-slide active"
                                } else {
                                    "project-hero-slide"
                                }
                            }
                            style=style
                        ></div>
                    }
                })
                .collect_view()}
            <div class="project-hero-overlay">
                <span class="project-hero-category">{project.category_label()}</span>
                <h1 class="project-hero-title">{project.title.clone()}</h1>
                <p class="project-hero-subtitle">{project.description.clone()}</p>
            </div>
        </header>
    }
}
