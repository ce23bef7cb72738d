use contracts::shared::carousel::Carousel;
use leptos::prelude::*;
use std::time::Duration;

/// Слайдер с автопрокруткой. Таймер снимается вместе с компонентом.
pub fn use_carousel(len: usize, interval_ms: u32) -> RwSignal<Carousel> {
    let carousel = RwSignal::new(Carousel::new(len));

    let handle = set_interval_with_handle(
        move || carousel.maybe_update(|c| c.tick()),
        Duration::from_millis(u64::from(interval_ms)),
    )
    .map_err(|e| log::error!("Failed to start carousel timer: {:?}", e))
    .ok();

    on_cleanup(move || {
        if let Some(handle) = handle {
            handle.clear();
        }
    });

    carousel
}
