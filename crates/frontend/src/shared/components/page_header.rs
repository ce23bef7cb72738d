use leptos::prelude::*;

/// Шапка страниц списков: надзаголовок, заголовок и слот под фильтры
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] eyebrow: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header class="page-header">
            {eyebrow.map(|e| view! { <span class="page-header__eyebrow">{e}</span> })}
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            <div class="page-header__actions">
                {children()}
            </div>
        </header>
    }
}
