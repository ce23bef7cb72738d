use crate::layout::global_context::use_global_context;
use contracts::enums::viewport_class::ViewportClass;
use leptos::ev;
use leptos::prelude::*;

fn inner_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(ViewportClass::TABLET_BELOW)
}

/// Класс вьюпорта, пересчитывается при resize.
/// Сигнал меняется только при смене класса, а не на каждый пиксель.
pub fn use_viewport_class() -> ReadSignal<ViewportClass> {
    let ctx = use_global_context();
    let layout = ctx.config.with_value(|c| c.layout.clone());

    let viewport = RwSignal::new(layout.viewport_class(inner_width()));

    let handle = window_event_listener(ev::resize, move |_| {
        let next = layout.viewport_class(inner_width());
        if viewport.get_untracked() != next {
            log::debug!("viewport class -> {}", next.code());
            viewport.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    viewport.read_only()
}
