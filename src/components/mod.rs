//! UI Components
//!
//! Reusable Leptos components.

mod alert_list;
mod bin_map;
mod bin_table;
mod card;
mod edit_bin_dialog;
mod fill_badge;
mod nav_bar;
mod new_bin_form;
mod status_select;
mod status_table;

pub use alert_list::AlertList;
pub use bin_map::BinMap;
pub use bin_table::BinTable;
pub use card::Card;
pub use edit_bin_dialog::EditBinDialog;
pub use fill_badge::FillBadge;
pub use nav_bar::NavBar;
pub use new_bin_form::NewBinForm;
pub use status_select::StatusSelect;
pub use status_table::StatusTable;
