//! Map Geometry
//!
//! Web Mercator projection and slippy-map tile coverage for the dashboard map.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Edge length of a map tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Deepest zoom level tile servers publish; deeper requests are clamped to it
pub const MAX_ZOOM: u8 = 19;

/// Latitude limit of the square Mercator world
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Pixel position, world or screen depending on context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Number of tiles along one edge of the world at a zoom level
fn tiles_per_edge(zoom: u8) -> u32 {
    1u32.checked_shl(u32::from(zoom.min(MAX_ZOOM))).unwrap_or(1 << MAX_ZOOM)
}

/// World pixel coordinates of a position at the given zoom
pub fn project(position: LatLng, zoom: u8) -> Point {
    let size = TILE_SIZE * f64::from(tiles_per_edge(zoom));
    let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin = (lat * PI / 180.0).sin();

    Point {
        x: (position.lng + 180.0) / 360.0 * size,
        y: (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * size,
    }
}

/// A tile to draw and where its top-left corner lands on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    pub left: f64,
    pub top: f64,
}

/// Fixed-size map window centered on a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// World pixel of the top-left corner
    pub fn origin(&self) -> Point {
        let center = project(self.center, self.zoom);
        Point {
            x: center.x - f64::from(self.width) / 2.0,
            y: center.y - f64::from(self.height) / 2.0,
        }
    }

    pub fn to_screen(&self, position: LatLng) -> Point {
        let origin = self.origin();
        let world = project(position, self.zoom);
        Point {
            x: world.x - origin.x,
            y: world.y - origin.y,
        }
    }

    /// Tiles covering the viewport, row by row
    ///
    /// Columns wrap around the antimeridian, rows past the poles are skipped.
    pub fn tiles(&self) -> Vec<Tile> {
        let origin = self.origin();
        let count = i64::from(tiles_per_edge(self.zoom));

        let first_col = (origin.x / TILE_SIZE).floor() as i64;
        let end_col = ((origin.x + f64::from(self.width)) / TILE_SIZE).ceil() as i64;
        let first_row = ((origin.y / TILE_SIZE).floor() as i64).max(0);
        let end_row = (((origin.y + f64::from(self.height)) / TILE_SIZE).ceil() as i64).min(count);

        let mut tiles = Vec::new();
        for row in first_row..end_row {
            for col in first_col..end_col {
                tiles.push(Tile {
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    z: self.zoom.min(MAX_ZOOM),
                    left: col as f64 * TILE_SIZE - origin.x,
                    top: row as f64 * TILE_SIZE - origin.y,
                });
            }
        }
        tiles
    }
}

/// Fill a `{s}/{z}/{x}/{y}` tile URL template
pub fn tile_url(template: &str, subdomains: &[String], tile: &Tile) -> String {
    let subdomain = if subdomains.is_empty() {
        ""
    } else {
        let index = (tile.x as usize + tile.y as usize) % subdomains.len();
        subdomains[index].as_str()
    };

    template
        .replace("{s}", subdomain)
        .replace("{z}", &tile.z.to_string())
        .replace("{x}", &tile.x.to_string())
        .replace("{y}", &tile.y.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_project_world_corners() {
        let center = project(LatLng::new(0.0, 0.0), 0);
        assert!(close(center.x, 128.0) && close(center.y, 128.0));

        let north_west = project(LatLng::new(90.0, -180.0), 1);
        assert!(close(north_west.x, 0.0));
        assert!(close(north_west.y, 0.0));
    }

    #[test]
    fn test_center_lands_mid_viewport() {
        let viewport = Viewport {
            center: LatLng::new(40.730610, -73.935242),
            zoom: 12,
            width: 600,
            height: 400,
        };
        let screen = viewport.to_screen(viewport.center);
        assert!(close(screen.x, 300.0));
        assert!(close(screen.y, 200.0));
    }

    #[test]
    fn test_single_world_tile() {
        let viewport = Viewport { center: LatLng::new(0.0, 0.0), zoom: 0, width: 256, height: 256 };
        let tiles = viewport.tiles();
        assert_eq!(tiles, vec![Tile { x: 0, y: 0, z: 0, left: 0.0, top: 0.0 }]);
    }

    #[test]
    fn test_columns_wrap() {
        let viewport = Viewport { center: LatLng::new(0.0, 0.0), zoom: 1, width: 1024, height: 256 };
        let tiles = viewport.tiles();
        assert_eq!(tiles.len(), 8);
        let first_row: Vec<u32> = tiles.iter().filter(|t| t.y == 0).map(|t| t.x).collect();
        assert_eq!(first_row, vec![1, 0, 1, 0]);
        assert!(close(tiles[0].left, 0.0));
        assert!(close(tiles[1].left, 256.0));
    }

    #[test]
    fn test_rows_past_poles_skipped() {
        let viewport = Viewport { center: LatLng::new(0.0, 0.0), zoom: 0, width: 256, height: 1024 };
        let tiles = viewport.tiles();
        assert_eq!(tiles.len(), 1);
        assert!(close(tiles[0].top, 384.0));
    }

    #[test]
    fn test_zoom_past_max_is_clamped() {
        let deep = Viewport { center: LatLng::new(40.73, -73.93), zoom: 40, width: 512, height: 256 };
        let max = Viewport { zoom: MAX_ZOOM, ..deep };

        let tiles = deep.tiles();
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|t| t.z == MAX_ZOOM));
        assert_eq!(tiles, max.tiles());
        assert_eq!(project(deep.center, 255), project(deep.center, MAX_ZOOM));
    }

    #[test]
    fn test_tile_url() {
        let subdomains = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let tile = Tile { x: 1205, y: 1539, z: 12, left: 0.0, top: 0.0 };
        let url = tile_url("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", &subdomains, &tile);
        assert_eq!(url, "https://c.tile.openstreetmap.org/12/1205/1539.png");

        let url = tile_url("/tiles/{s}{z}/{x}/{y}.png", &[], &tile);
        assert_eq!(url, "/tiles/12/1205/1539.png");
    }
}
