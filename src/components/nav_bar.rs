//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

/// Page links (label, path)
const PAGES: &[(&str, &str)] = &[
    ("Dashboard", "/mainpage"),
    ("Bins", "/bin"),
    ("Sign Up", "/signup"),
];

/// Top navigation between the three pages
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"♻ Smart Waste"</span>
            {PAGES.iter().map(|(label, path)| view! {
                <A href=*path attr:class="nav-link">{*label}</A>
            }).collect_view()}
        </nav>
    }
}
