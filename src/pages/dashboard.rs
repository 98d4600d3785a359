//! Dashboard Page
//!
//! Map of bin locations next to a status summary table.

use leptos::prelude::*;
use waste_domain::seed_statuses;

use crate::components::{BinMap, Card, StatusTable};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let statuses = seed_statuses().unwrap_or_else(|e| {
        log::error!("[DASHBOARD] Could not build bin snapshot: {}", e);
        Vec::new()
    });
    let map_statuses = statuses.clone();

    view! {
        <div class="page">
            <h1 class="page-title">"Smart Waste Management Dashboard"</h1>

            <div class="dashboard-grid">
                <Card title="Bin Locations" icon="📍">
                    <BinMap statuses=map_statuses />
                </Card>

                <Card title="Bin Status Summary" icon="🗑">
                    <StatusTable statuses=statuses />
                </Card>
            </div>
        </div>
    }
}
