//! Alert List Component

use leptos::prelude::*;
use waste_domain::alerts;

use crate::store::{use_bin_store, BinPageStateStoreFields};

/// One entry per bin at or above the alert threshold
#[component]
pub fn AlertList() -> impl IntoView {
    let store = use_bin_store();

    let alert_bins = move || alerts(&store.bins().read()).cloned().collect::<Vec<_>>();

    view! {
        <ul class="alert-list">
            {move || alert_bins().into_iter().map(|bin| view! {
                <li class="alert-item">
                    <p class="alert-title">{format!("Alert: Bin {} is {}% full", bin.id, bin.fill_level)}</p>
                    <p>{format!("Location: {}", bin.location)}</p>
                </li>
            }).collect_view()}
        </ul>
    }
}
