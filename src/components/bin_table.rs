//! Bin Table Component
//!
//! Managed bins with edit and remove actions.

use leptos::prelude::*;

use crate::components::FillBadge;
use crate::store::{store_remove_bin, store_start_edit, use_bin_store, BinPageStateStoreFields};

/// "Manage Bins" table
#[component]
pub fn BinTable() -> impl IntoView {
    let store = use_bin_store();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Bin ID"</th>
                    <th>"Location"</th>
                    <th>"Sensor Status"</th>
                    <th>"Fill Level"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                // Ids may repeat, so rows are keyed by position and content
                <For
                    each=move || store.bins().get().into_iter().enumerate()
                    key=|(index, bin)| (*index, bin.clone())
                    children=move |(_, bin)| {
                        let bin_id = bin.id;
                        let edit_copy = bin.clone();
                        view! {
                            <tr>
                                <td>{bin.id}</td>
                                <td>{bin.location.clone()}</td>
                                <td>{bin.sensor_status.as_str()}</td>
                                <td><FillBadge fill_level=bin.fill_level /></td>
                                <td class="row-actions">
                                    <button
                                        class="outline-btn"
                                        on:click=move |_| store_start_edit(&store, edit_copy.clone())
                                    >
                                        "✎ Edit"
                                    </button>
                                    <button
                                        class="outline-btn"
                                        on:click=move |_| { store_remove_bin(&store, bin_id); }
                                    >
                                        "🗑 Remove"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
