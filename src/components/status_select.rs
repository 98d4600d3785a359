//! Sensor Status Select Component
//!
//! Reusable sensor status dropdown with an empty placeholder option.

use leptos::prelude::*;
use waste_domain::SensorStatus;

/// Sensor status dropdown
///
/// # Arguments
/// * `id` - element id, referenced by the field's label
/// * `value` - current selection (None shows the placeholder)
/// * `required` - let the browser block submission while nothing is chosen
/// * `on_change` - called with the parsed selection
#[component]
pub fn StatusSelect(
    #[prop(into)] id: String,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<Option<SensorStatus>>,
    on_change: impl Fn(Option<SensorStatus>) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="form-select"
            required=required
            prop:value=move || value.get().map(|s| s.as_str()).unwrap_or("")
            on:change=move |ev| on_change(event_target_value(&ev).parse().ok())
        >
            <option value="" disabled=true>"Select status"</option>
            {SensorStatus::ALL.iter().map(|status| {
                let status = *status;
                view! {
                    <option
                        value=status.as_str()
                        selected=move || value.get() == Some(status)
                    >
                        {status.as_str()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
