use crate::domain::a001_project::ui::featured::FeaturedProjects;
use crate::domain::a002_service::ui::slider::ServicesSlider;
use crate::layout::global_context::use_global_context;
use crate::shared::carousel::use_carousel;
use crate::shared::icons::icon;
use contracts::shared::carousel::Carousel;
use leptos::prelude::*;

/// Слайдов в hero на главной
const HERO_SLIDE_COUNT: usize = 8;

/// "03 / 08"; без слайдов счётчик не показывается
fn counter_label(carousel: &Carousel) -> Option<String> {
    if carousel.is_empty() {
        return None;
    }
    Some(format!("{:02} / {:02}", carousel.current() + 1, carousel.len()))
}

#[component]
#[allow(non_snake_case)]
fn Hero() -> impl IntoView {
    let ctx = use_global_context();
    let (name, tagline, interval_ms) = ctx.config.with_value(|c| {
        (
            c.studio.name.clone(),
            c.studio.tagline.clone(),
            c.carousel.hero_interval_ms,
        )
    });

    // Обложки проектов в порядке каталога
    let slides: Vec<String> = ctx.content.with_value(|c| {
        c.projects
            .records()
            .iter()
            .map(|p| p.image.clone())
            .take(HERO_SLIDE_COUNT)
            .collect()
    });
    let carousel = use_carousel(slides.len(), interval_ms);

    view! {
        <section class="hero">
            {slides
                .into_iter()
                .enumerate()
                .map(|(i, src)| view! {
                    <div
                        class=move || if carousel.with(|c| c.current() == i) { "hero-slide active" } else { "hero-slide" }
                        style=format!("background-image: url('{}');", src)
                    ></div>
                })
                .collect_view()}
            <div class="hero-overlay">
                <h1 class="hero-title">{name}</h1>
                <p class="hero-tagline">{tagline}</p>
                <a href="/projects" class="hero-cta">
                    <span>"Explore our work"</span>
                    {icon("arrow-right")}
                </a>
            </div>
            {move || carousel.with(counter_label).map(|label| view! {
                <div class="hero-counter">{label}</div>
            })}
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero />
            <ServicesSlider />
            <FeaturedProjects />
        </div>
    }
}
