//! Status Table Component

use leptos::prelude::*;
use waste_domain::BinStatus;

use crate::components::FillBadge;

/// "Bin Status Summary" table for the dashboard
#[component]
pub fn StatusTable(statuses: Vec<BinStatus>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Bin ID"</th>
                    <th>"Fill Level"</th>
                    <th>"Location"</th>
                    <th>"Last Update"</th>
                </tr>
            </thead>
            <tbody>
                {statuses.into_iter().map(|status| view! {
                    <tr>
                        <td>{status.id}</td>
                        <td><FillBadge fill_level=status.fill_level /></td>
                        <td>{status.location.clone()}</td>
                        <td>{status.last_update_label()}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
