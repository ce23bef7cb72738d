use contracts::shared::routing::NotFoundAction;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Реакция детальной страницы на ненайденную запись
#[component]
pub fn NotFoundView(action: NotFoundAction) -> impl IntoView {
    match action {
        NotFoundAction::Redirect { to } => {
            let navigate = use_navigate();
            Effect::new(move |_| {
                log::info!("record not found, redirecting to {}", to);
                navigate(
                    &to,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            });
            ().into_any()
        }
        NotFoundAction::Inline {
            message,
            back_href,
            back_label,
        } => view! {
            <div class="not-found">
                <h1>{message}</h1>
                <a href=back_href class="back-link">{back_label}</a>
            </div>
        }
        .into_any(),
    }
}
