use crate::layout::global_context::use_global_context;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Пункты меню: (подпись, путь)
const NAV_LINKS: [(&str, &str); 3] = [
    ("Projects", "/projects"),
    ("Services", "/services"),
    ("Contact", "/branches"),
];

fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.starts_with(&format!("{}/", href))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();
    let pathname = use_location().pathname;
    let studio_name = ctx.config.with_value(|c| c.studio.name.clone());

    // Закрываем мобильное меню после перехода на другую страницу
    Effect::new(move |_| {
        pathname.track();
        ctx.close_menu();
    });

    view! {
        <nav data-zone="header" class="navbar">
            <a href="/" class="navbar__logo">{studio_name}</a>

            <button
                class=move || if ctx.menu_open.get() { "navbar__toggle open" } else { "navbar__toggle" }
                aria-label="Toggle menu"
                on:click=move |_| ctx.toggle_menu()
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            <div class=move || if ctx.menu_open.get() { "navbar__links open" } else { "navbar__links" }>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| {
                        let href = *href;
                        view! {
                            <a
                                href=href
                                class=move || {
                                    if pathname.with(|p| is_active(p, href)) {
                                        "navbar__link active"
                                    } else {
                                        "navbar__link"
                                    }
                                }
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
                <a href="/contact" class="navbar__cta">"Let's Talk"</a>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_matches_nested_paths() {
        assert!(is_active("/projects", "/projects"));
        assert!(is_active("/projects/marina-residence", "/projects"));
        assert!(!is_active("/projectsx", "/projects"));
        assert!(!is_active("/", "/services"));
    }
}
