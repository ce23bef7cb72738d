use crate::layout::global_context::use_global_context;
use crate::shared::carousel::use_carousel;
use crate::shared::icons::icon;
use contracts::domain::a002_service::aggregate::Service;
use contracts::domain::common::ALL_CATEGORY_ID;
use contracts::enums::catalog_kind::CatalogKind;
use contracts::shared::content::SiteContent;
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::TouchEvent;

fn first_touch_x(list: web_sys::TouchList) -> Option<f64> {
    list.get(0).map(|t| f64::from(t.client_x()))
}

/// Слайды: все услуги каталога в исходном порядке
fn slider_services(content: &SiteContent) -> Vec<Arc<Service>> {
    content.services.by_category(ALL_CATEGORY_ID)
}

/// Слайдер услуг на главной.
///
/// Автопрокрутка останавливается, пока курсор над слайдером.
/// На тач-экранах листается свайпом.
#[component]
#[allow(non_snake_case)]
pub fn ServicesSlider() -> impl IntoView {
    let ctx = use_global_context();
    let services = ctx.content.with_value(slider_services);
    let (interval_ms, swipe_threshold) = ctx.config.with_value(|c| {
        (
            c.carousel.slider_interval_ms,
            c.carousel.swipe_threshold_px,
        )
    });

    let carousel = use_carousel(services.len(), interval_ms);
    let touch_start = StoredValue::new(None::<f64>);

    let on_touch_start = move |ev: TouchEvent| {
        touch_start.set_value(first_touch_x(ev.touches()));
    };
    let on_touch_end = move |ev: TouchEvent| {
        let start = touch_start.get_value();
        touch_start.set_value(None);
        if let (Some(start), Some(end)) = (start, first_touch_x(ev.changed_touches())) {
            carousel.maybe_update(|c| c.swipe(start, end, swipe_threshold));
        }
    };

    let dots = (0..services.len())
        .map(|i| view! {
            <button
                class=move || if carousel.with(|c| c.current() == i) { "slider-dot active" } else { "slider-dot" }
                aria-label=format!("Go to slide {}", i + 1)
                on:click=move |_| carousel.update(|c| c.go_to(i))
            ></button>
        })
        .collect_view();

    let slides = services
        .into_iter()
        .map(|service| {
            let href = CatalogKind::Services.detail_path(&service.slug);
            view! {
                <a href=href class="services-slide">
                    <img src=service.image.clone() alt=service.title.clone() loading="lazy" />
                    <div class="services-slide__content">
                        <span class="services-slide__icon">{service.icon.clone().unwrap_or_default()}</span>
                        <h3>{service.title.clone()}</h3>
                        <p>{service.description.clone()}</p>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            class="services-slider"
            on:mouseenter=move |_| carousel.update(|c| c.pause())
            on:mouseleave=move |_| carousel.update(|c| c.resume())
        >
            <div class="section-heading">
                <span class="section-heading__eyebrow">"What we do"</span>
                <h2>"OUR SERVICES"</h2>
            </div>

            <div class="services-slider__viewport" on:touchstart=on_touch_start on:touchend=on_touch_end>
                <div
                    class="services-slider__track"
                    style=move || format!(
                        "transform: translateX(-{}%);",
                        carousel.with(|c| c.track_offset_percent())
                    )
                >
                    {slides}
                </div>
            </div>

            <div class="services-slider__controls">
                <button class="slider-arrow" aria-label="Previous" on:click=move |_| carousel.update(|c| c.prev())>
                    {icon("chevron-left")}
                </button>
                <div class="slider-dots">{dots}</div>
                <button class="slider-arrow" aria-label="Next" on:click=move |_| carousel.update(|c| c.next())>
                    {icon("chevron-right")}
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_shows_every_service() {
        let content = SiteContent::load().unwrap();
        let slides = slider_services(&content);
        assert_eq!(slides.len(), content.services.len());
        assert!(slides.iter().any(|s| !s.featured));
    }
}
