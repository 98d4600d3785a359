//! Smart Waste Management App
//!
//! Root component with navigation and client-side routing.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::NavBar;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{bin_management::BinManagementPage, dashboard::DashboardPage, signup::SignupPage};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(AppConfig::load()));

    view! {
        <Router>
            <NavBar />
            <main class="main-content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/mainpage" /> } />
                    <Route path=StaticSegment("mainpage") view=DashboardPage />
                    <Route path=StaticSegment("bin") view=BinManagementPage />
                    <Route path=StaticSegment("signup") view=SignupPage />
                </Routes>
            </main>
        </Router>
    }
}
