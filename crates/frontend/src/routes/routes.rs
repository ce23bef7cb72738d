use crate::domain::a001_project::ui::details::ProjectDetails;
use crate::domain::a001_project::ui::list::ProjectList;
use crate::domain::a002_service::ui::details::ServiceDetails;
use crate::domain::a002_service::ui::list::ServiceList;
use crate::domain::a003_branch::ui::list::BranchList;
use crate::layout::Shell;
use crate::system::pages::contact::ContactPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectList />
                    <Route path=path!("/projects/:slug") view=ProjectDetails />
                    <Route path=path!("/services") view=ServiceList />
                    <Route path=path!("/services/:slug") view=ServiceDetails />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/branches") view=BranchList />
                </Routes>
            </Shell>
        </Router>
    }
}
