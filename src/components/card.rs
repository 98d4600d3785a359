//! Card Component
//!
//! Titled panel used by every page.

use leptos::prelude::*;

/// Card with a header row and body
#[component]
pub fn Card(
    #[prop(into)] title: String,
    /// Emoji or glyph shown before the title
    #[prop(optional, into)] icon: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("card {}", class)>
            <header class="card-header">
                <h2 class="card-title">
                    <span class="card-icon">{icon}</span>
                    {title}
                </h2>
            </header>
            <div class="card-content">
                {children()}
            </div>
        </section>
    }
}
