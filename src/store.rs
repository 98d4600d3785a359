//! Bin Management State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use waste_domain::{add_bin, remove_bin, seed_bins, update_bin, Bin, BinDraft, DomainResult};

/// State of the bin management page, rebuilt from seed data on every mount
#[derive(Clone, Debug, Default, Store)]
pub struct BinPageState {
    /// Managed bins in insertion order
    pub bins: Vec<Bin>,
    /// Copy being edited in the dialog (None = dialog closed)
    pub editing: Option<Bin>,
}

impl BinPageState {
    pub fn new() -> Self {
        Self {
            bins: seed_bins(),
            editing: None,
        }
    }
}

/// Type alias for the store
pub type BinStore = Store<BinPageState>;

/// Get the bin store from context
pub fn use_bin_store() -> BinStore {
    expect_context::<BinStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Validate a draft and append the resulting bin
pub fn store_add_bin(store: &BinStore, draft: &BinDraft) -> DomainResult<Bin> {
    add_bin(&mut store.bins().write(), draft)
}

/// Apply the edited copy to every bin with its id
pub fn store_update_bin(store: &BinStore, edited: &Bin) -> DomainResult<usize> {
    update_bin(&mut store.bins().write(), edited)
}

/// Remove bins by ID
pub fn store_remove_bin(store: &BinStore, bin_id: i32) -> usize {
    remove_bin(&mut store.bins().write(), bin_id)
}

/// Open the edit dialog on a copy of the bin
pub fn store_start_edit(store: &BinStore, bin: Bin) {
    store.editing().set(Some(bin));
}

/// Close the edit dialog without saving
pub fn store_cancel_edit(store: &BinStore) {
    store.editing().set(None);
}
