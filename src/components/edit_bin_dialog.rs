//! Edit Bin Dialog Component
//!
//! Modal for changing a bin's location and sensor status.

use leptos::prelude::*;
use waste_domain::SensorStatus;

use crate::components::StatusSelect;
use crate::store::{store_cancel_edit, store_update_bin, use_bin_store, BinPageStateStoreFields};

/// Edit dialog, open while the store holds an editing copy
#[component]
pub fn EditBinDialog() -> impl IntoView {
    let store = use_bin_store();

    let editing_status = Signal::derive(move || store.editing().get().map(|bin| bin.sensor_status));

    let set_location = move |location: String| {
        store.editing().update(|editing| {
            if let Some(bin) = editing {
                bin.location = location;
            }
        });
    };

    let set_status = move |status: Option<SensorStatus>| {
        let Some(status) = status else { return };
        store.editing().update(|editing| {
            if let Some(bin) = editing {
                bin.sensor_status = status;
            }
        });
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(edited) = store.editing().get() else { return };
        if edited.location.trim().is_empty() { return; }

        if let Err(e) = store_update_bin(&store, &edited) {
            log::warn!("[BINS] Edit of bin {} not applied: {}", edited.id, e);
        }
        store_cancel_edit(&store);
    };

    view! {
        <Show when=move || store.editing().get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| store_cancel_edit(&store)>
                <div class="dialog" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <div class="dialog-header">
                        <span class="dialog-title">"Edit Bin"</span>
                        <button class="close-btn" on:click=move |_| store_cancel_edit(&store)>"×"</button>
                    </div>
                    <form class="edit-bin-form" on:submit=save>
                        <div class="form-field">
                            <label for="edit-bin-location">"Location"</label>
                            <input
                                id="edit-bin-location"
                                type="text"
                                required=true
                                prop:value=move || store.editing().get().map(|bin| bin.location).unwrap_or_default()
                                on:input=move |ev| set_location(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label for="edit-bin-sensor">"Sensor Status"</label>
                            <StatusSelect
                                id="edit-bin-sensor"
                                required=true
                                value=editing_status
                                on_change=set_status
                            />
                        </div>
                        <button type="submit" class="primary-btn">"Update Bin"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
