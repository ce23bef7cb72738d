//! Работа с фрагментом URL (`#category`) на страницах списков.
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Текущий `location.hash` вместе с `#`, пустая строка если его нет
pub fn current_fragment() -> String {
    window().location().hash().unwrap_or_default()
}

/// Заменяет фрагмент без новой записи в истории и без перехода
pub fn replace_fragment(fragment: &str) {
    let Ok(history) = window().history() else {
        log::warn!("history API is not available");
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)) {
        log::warn!("Failed to replace url fragment {}: {:?}", fragment, e);
    }
}
