//! CardAnimated: карточка с анимацией появления.
//!
//! Анимация определена в `layout.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```text
//! // С каскадной задержкой для stagger-эффекта
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=80>  // карточка 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками в сетке
pub const STAGGER_STEP_MS: u32 = 60;

/// Inline-стиль анимации появления
pub fn appear_style(delay_ms: u32) -> String {
    format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
}

/// Задержка для карточки с номером `index`
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS)
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили (добавляются после стилей анимации).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        appear_style(delay_ms)
    } else {
        format!("{} {}", appear_style(delay_ms), style)
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
