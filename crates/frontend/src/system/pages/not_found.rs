use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="back-link">"Back to home"</a>
        </section>
    }
}
