//! Waste Management Domain Layer
//!
//! Entities, form drafts and list operations behind the UI pages.
//! This crate has NO UI dependencies and is tested on the host.

mod entity;
mod bin;
mod fill;
mod geo;
mod registry;
mod signup;
mod status;

pub use entity::{remove_by_id, Entity, DomainError, DomainResult};
pub use bin::{Bin, BinDraft, SensorStatus};
pub use fill::{FillBand, ALERT_THRESHOLD, WARNING_THRESHOLD};
pub use geo::{project, tile_url, LatLng, Point, Tile, Viewport, MAX_ZOOM, TILE_SIZE};
pub use registry::{add_bin, alerts, remove_bin, seed_bins, update_bin};
pub use signup::{Role, Signup, SignupForm};
pub use status::{seed_statuses, BinStatus};
