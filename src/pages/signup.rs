//! Signup Page
//!
//! Collects name, password, role and location. Submission is only logged.

use leptos::prelude::*;
use waste_domain::{Role, SignupForm};

use crate::components::Card;

const INTRO: &str = "Join us in revolutionizing waste management for smart cities. \
    Our IoT-based system monitors bin levels in real-time, optimizes collection routes, \
    and promotes a cleaner environment. By signing up, you're taking a step towards a \
    sustainable future and helping create cleaner, healthier urban spaces for all.";

#[component]
pub fn SignupPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal::<Option<Role>>(None);
    let (location, set_location) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get(),
            password: password.get(),
            role: role.get(),
            location: location.get(),
        };
        match form.validate() {
            Ok(signup) => log::info!("[SIGNUP] Submitted {:?}", signup),
            Err(e) => log::warn!("[SIGNUP] Rejected: {}", e),
        }
    };

    view! {
        <div class="page page-centered">
            <Card title="Smart Waste Management" icon="🍃" class="signup-card">
                <p class="card-description">{INTRO}</p>
                <form class="signup-form" on:submit=submit>
                    <div class="form-field">
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Enter your name"
                            required=true
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="role">"Role"</label>
                        <select
                            id="role"
                            class="form-select"
                            required=true
                            prop:value=move || role.get().map(|r| r.as_str()).unwrap_or("")
                            on:change=move |ev| set_role.set(event_target_value(&ev).parse().ok())
                        >
                            <option value="" disabled=true>"Select your role"</option>
                            {Role::ALL.iter().map(|r| view! {
                                <option value=r.as_str()>{r.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label for="location">"Location"</label>
                        <input
                            id="location"
                            type="text"
                            placeholder="Enter your location"
                            required=true
                            prop:value=move || location.get()
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="primary-btn">"Sign Up"</button>
                </form>
            </Card>
        </div>
    }
}
