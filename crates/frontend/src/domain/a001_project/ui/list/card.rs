use crate::shared::components::card_animated::{appear_style, stagger_delay};
use contracts::domain::a001_project::aggregate::Project;
use contracts::enums::catalog_kind::CatalogKind;
use contracts::shared::layout_expander::ExpandedCard;
use leptos::prelude::*;

/// Inline-стиль карточки: высота в строках masonry-сетки и задержка появления
fn card_style(span: Option<u32>, index: usize) -> String {
    let appear = appear_style(stagger_delay(index));
    match span {
        Some(rows) => format!("grid-row-end: span {}; {}", rows, appear),
        None => appear,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectCard(card: ExpandedCard<Project>, index: usize) -> impl IntoView {
    let project = card.record;
    let href = CatalogKind::Projects.detail_path(&project.slug);
    let class = format!("project-card {}", card.variant.css_class());

    view! {
        <a href=href class=class style=card_style(card.span, index)>
            <div class="project-card-image">
                <img src=project.image.clone() alt=project.title.clone() loading="lazy" />
            </div>
            <div class="project-card-overlay">
                <span class="project-card-category">{project.category_label()}</span>
                <h3 class="project-card-title">{project.title.clone()}</h3>
                <p class="project-card-description">{project.description.clone()}</p>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_style_span() {
        assert_eq!(
            card_style(Some(42), 0),
            "grid-row-end: span 42; animation: card-appear 0.28s ease-out 0ms both;"
        );
        assert!(!card_style(None, 2).contains("grid-row-end"));
        assert!(card_style(None, 2).contains("120ms"));
    }
}
