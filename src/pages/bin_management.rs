//! Bin Management Page
//!
//! Add, edit and remove bins, with an alert list for nearly full ones.
//! State is seeded on mount and lost when the page is left.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AlertList, BinTable, Card, EditBinDialog, NewBinForm};
use crate::store::BinPageState;

#[component]
pub fn BinManagementPage() -> impl IntoView {
    provide_context(Store::new(BinPageState::new()));

    view! {
        <div class="page">
            <h1 class="page-title">"Bin Management System"</h1>

            <Card title="Add New Bin" icon="＋">
                <NewBinForm />
            </Card>

            <Card title="Manage Bins" icon="🗑">
                <BinTable />
            </Card>

            <Card title="Alerts" icon="⚠">
                <AlertList />
            </Card>

            <EditBinDialog />
        </div>
    }
}
