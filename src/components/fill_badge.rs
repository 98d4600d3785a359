//! Fill Badge Component

use leptos::prelude::*;
use waste_domain::FillBand;

/// Colored `NN%` badge for a fill level
#[component]
pub fn FillBadge(fill_level: u32) -> impl IntoView {
    let band = FillBand::from_level(fill_level);
    view! {
        <span class=format!("fill-badge {}", band.color())>
            {format!("{}%", fill_level)}
        </span>
    }
}
