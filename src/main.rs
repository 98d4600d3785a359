#![allow(warnings)]
//! Smart Waste Management Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    mount_to_body(App);
}
