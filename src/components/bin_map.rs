//! Bin Map Component
//!
//! Static tile map with one colored marker per bin. Clicking a marker toggles its popup.

use leptos::prelude::*;
use waste_domain::{tile_url, BinStatus, TILE_SIZE};

use crate::context::use_app_context;

/// Marker image size and anchor, matching the 2x color marker images
const ICON_SIZE: (f64, f64) = (25.0, 41.0);
const ICON_ANCHOR: (f64, f64) = (12.0, 41.0);
const SHADOW_SIZE: (f64, f64) = (41.0, 41.0);
/// Popup tip relative to the icon anchor
const POPUP_ANCHOR: (f64, f64) = (1.0, -34.0);

fn placed(left: f64, top: f64, size: (f64, f64)) -> String {
    format!("left: {:.1}px; top: {:.1}px; width: {}px; height: {}px;", left, top, size.0, size.1)
}

#[component]
pub fn BinMap(statuses: Vec<BinStatus>) -> impl IntoView {
    let map = use_app_context().map_config();
    let viewport = map.viewport();
    let (open_popup, set_open_popup) = signal::<Option<usize>>(None);

    let tiles = viewport.tiles().into_iter().map(|tile| {
        let src = tile_url(&map.tile_url, &map.subdomains, &tile);
        view! {
            <img
                class="map-tile"
                src=src
                alt=""
                style=placed(tile.left, tile.top, (TILE_SIZE, TILE_SIZE))
            />
        }
    }).collect_view();

    let markers = statuses.into_iter().enumerate().map(|(index, status)| {
        let point = viewport.to_screen(status.position);
        let left = point.x - ICON_ANCHOR.0;
        let top = point.y - ICON_ANCHOR.1;
        let icon = map.marker_icon(status.band());
        let (title, location) = status.popup_text();

        view! {
            <img
                class="map-marker-shadow"
                src=map.marker_shadow_url.clone()
                alt=""
                style=placed(left, top, SHADOW_SIZE)
            />
            <img
                class="map-marker"
                src=icon
                alt=format!("Bin {}", status.id)
                style=placed(left, top, ICON_SIZE)
                on:click=move |_| set_open_popup.update(|open| {
                    *open = if *open == Some(index) { None } else { Some(index) };
                })
            />
            <Show when=move || open_popup.get() == Some(index)>
                <div
                    class="map-popup"
                    style=format!("left: {:.1}px; top: {:.1}px;", point.x + POPUP_ANCHOR.0, point.y + POPUP_ANCHOR.1)
                >
                    {title.clone()}
                    <br />
                    {location.clone()}
                </div>
            </Show>
        }
    }).collect_view();

    view! {
        <div
            class="bin-map"
            style=format!("width: {}px; height: {}px;", map.width, map.height)
        >
            {tiles}
            {markers}
            <span class="map-attribution">{map.attribution.clone()}</span>
        </div>
    }
}
