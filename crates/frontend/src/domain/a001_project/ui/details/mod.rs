mod gallery;
mod hero;

use self::gallery::ProjectGallery;
use self::hero::ProjectHero;
use crate::layout::global_context::{project_catalog, use_global_context};
use crate::shared::icons::icon;
use crate::shared::not_found::NotFoundView;
use crate::shared::resolution::use_slug_resolution;
use contracts::domain::a001_project::aggregate::Project;
use contracts::enums::catalog_kind::CatalogKind;
use contracts::shared::routing::{InlineNotFound, Resolution};
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::Spinner;

const PAGE_CLASS: &str = "project-detail-page";
const SCROLLED_CLASS: &str = "project-nav-scrolled";

fn toggle_body_class(class: &str, on: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("Failed to toggle body class {}: {:?}", class, e);
    }
}

fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Классы `body` для прозрачной навигации поверх hero
/// и её затемнения после прокрутки.
fn use_scrolled_body_class(threshold: f64) {
    toggle_body_class(PAGE_CLASS, true);

    let update = move || {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        toggle_body_class(SCROLLED_CLASS, is_scrolled(scroll_y, threshold));
    };
    update();

    let handle = window_event_listener(ev::scroll, move |_| update());
    on_cleanup(move || {
        handle.remove();
        toggle_body_class(SCROLLED_CLASS, false);
        toggle_body_class(PAGE_CLASS, false);
    });
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectDetails() -> impl IntoView {
    let resolution = use_slug_resolution(project_catalog);

    move || match resolution.get() {
        Resolution::Loading => view! {
            <div class="project-detail-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        Resolution::Found(project) => view! { <ProjectDetailsView project=project /> }.into_any(),
        not_found => {
            let action = not_found.not_found_action(&InlineNotFound(CatalogKind::Projects));
            action.map(|action| view! { <NotFoundView action=action /> }).into_any()
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn ProjectDetailsView(project: Arc<Project>) -> impl IntoView {
    // Прозрачная навигация нужна только поверх hero найденного проекта
    let ctx = use_global_context();
    let threshold = ctx
        .config
        .with_value(|c| c.layout.detail_scroll_threshold_px);
    use_scrolled_body_class(threshold);

    let meta = [
        ("Year", project.year_label()),
        ("Location", project.location.clone().unwrap_or_default()),
        ("Category", project.category_label()),
        ("Area", project.area.clone().unwrap_or_default()),
    ];

    view! {
        <article class="project-detail">
            <ProjectHero project=Arc::clone(&project) />

            <section class="project-detail-info">
                <div class="project-detail-description">
                    <p>{project.full_description.clone()}</p>
                </div>
                <dl class="project-meta-grid">
                    {meta
                        .into_iter()
                        .filter(|(_, value)| !value.is_empty())
                        .map(|(label, value)| view! {
                            <div class="project-meta-item">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
            </section>

            <ProjectGallery images=project.images.clone() title=project.title.clone() />

            <a href=CatalogKind::Projects.list_path() class="back-link">
                {icon("arrow-left")}
                <span>"Back to projects"</span>
            </a>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled_strictly_past_threshold() {
        assert!(!is_scrolled(0.0, 100.0));
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
    }
}
