//! New Bin Form Component
//!
//! Form for registering a bin with id, location and sensor status.

use leptos::prelude::*;
use waste_domain::{BinDraft, SensorStatus};

use crate::components::StatusSelect;
use crate::store::{store_add_bin, use_bin_store};

/// "Add New Bin" form
///
/// An invalid draft (non-numeric id) is dropped without feedback and the
/// inputs keep their text.
#[component]
pub fn NewBinForm() -> impl IntoView {
    let store = use_bin_store();

    let (new_id, set_new_id) = signal(String::new());
    let (new_location, set_new_location) = signal(String::new());
    let (new_status, set_new_status) = signal::<Option<SensorStatus>>(None);

    let create_bin = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = BinDraft {
            id: new_id.get(),
            location: new_location.get(),
            sensor_status: new_status.get(),
        };

        if store_add_bin(&store, &draft).is_ok() {
            set_new_id.set(String::new());
            set_new_location.set(String::new());
            set_new_status.set(None);
        }
    };

    view! {
        <form class="new-bin-form" on:submit=create_bin>
            <div class="form-grid">
                <div class="form-field">
                    <label for="new-bin-id">"Bin ID"</label>
                    <input
                        id="new-bin-id"
                        type="text"
                        required=true
                        prop:value=move || new_id.get()
                        on:input=move |ev| set_new_id.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="new-bin-location">"Location"</label>
                    <input
                        id="new-bin-location"
                        type="text"
                        required=true
                        prop:value=move || new_location.get()
                        on:input=move |ev| set_new_location.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="new-bin-sensor">"Sensor Status"</label>
                    <StatusSelect
                        id="new-bin-sensor"
                        required=true
                        value=new_status
                        on_change=move |status| set_new_status.set(status)
                    />
                </div>
            </div>
            <button type="submit" class="primary-btn">"Add Bin"</button>
        </form>
    }
}
