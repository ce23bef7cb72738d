pub mod footer;
pub mod global_context;
pub mod header;

use footer::Footer;
use header::Navbar;
use leptos::prelude::*;

/// Каркас страницы сайта.
///
/// ```text
/// +------------------------------------------+
/// |              Navbar                       |
/// +------------------------------------------+
/// |              Content (routes)             |
/// +------------------------------------------+
/// |              Footer                       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
