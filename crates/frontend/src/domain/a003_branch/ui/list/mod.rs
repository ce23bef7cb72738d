use crate::layout::global_context::use_global_context;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BranchList() -> impl IntoView {
    let ctx = use_global_context();
    let branches = ctx.content.with_value(|c| c.branches.clone());
    let email = ctx.config.with_value(|c| c.contact.email.clone());

    // Подсвеченный филиал под курсором
    let active = RwSignal::new(None::<u32>);

    view! {
        <section class="branches-page">
            <PageHeader title="OUR BRANCHES" eyebrow="Contact" subtitle=format!("General enquiries: {}", email)>
                <a href="/contact" class="page-header__cta">"Send us a message"</a>
            </PageHeader>

            <div class="branches-grid">
                {branches
                    .iter()
                    .enumerate()
                    .map(|(index, branch)| {
                        let branch = branch.clone();
                        let id = branch.id;
                        view! {
                            <div
                                class=move || {
                                    if active.get() == Some(id) { "branch-card active" } else { "branch-card" }
                                }
                                on:mouseenter=move |_| active.set(Some(id))
                                on:mouseleave=move |_| active.set(None)
                            >
                                <CardAnimated delay_ms=stagger_delay(index)>
                                    <h3 class="branch-card__name">{branch.name.clone()}</h3>
                                    <p class="branch-card__row">
                                        {icon("map-pin")}
                                        <span>{branch.address.clone()}</span>
                                    </p>
                                    <a class="branch-card__row" href=branch.phone_href()>
                                        {icon("phone")}
                                        <span>{branch.phone.clone()}</span>
                                    </a>
                                    <a class="branch-card__row" href=branch.email_href()>
                                        {icon("mail")}
                                        <span>{branch.email.clone()}</span>
                                    </a>
                                </CardAnimated>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
