use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_global_context();
    let (name, tagline, email) = ctx.config.with_value(|c| {
        (
            c.studio.name.clone(),
            c.studio.tagline.clone(),
            c.contact.email.clone(),
        )
    });
    let mailto = format!("mailto:{}", email);

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__brand">
                <span class="footer__logo">{name}</span>
                <p class="footer__tagline">{tagline}</p>
            </div>
            <div class="footer__links">
                <a href="/projects">"Projects"</a>
                <a href="/services">"Services"</a>
                <a href="/branches">"Branches"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <a class="footer__email" href=mailto>{email}</a>
        </footer>
    }
}
