use contracts::domain::common::Category;
use leptos::prelude::*;

/// Кнопки категорий над сеткой списка
#[component]
pub fn CategoryBar(
    categories: Vec<Category>,
    #[prop(into)] active: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-bar">
            {categories
                .into_iter()
                .map(|category| {
                    let id = category.id.clone();
                    let is_active = {
                        let id = id.clone();
                        move || active.with(|a| *a == id)
                    };
                    view! {
                        <button
                            class=move || if is_active() { "category-btn active" } else { "category-btn" }
                            on:click=move |_| on_select.run(id.clone())
                        >
                            {category.name}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
