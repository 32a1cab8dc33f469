//! Geographic scatter view and Web Mercator viewport math
//!
//! The view plots every row of the table it is given and centers on the
//! mean position of a separate focus subset. Callers pass the full dataset
//! as points and one country as focus, so the whole world stays plotted
//! while the camera moves.

use std::f64::consts::PI;

use serde::Serialize;

use super::format_number;
use crate::table::VolcanoTable;

/// Radius of a scatter point in meters before scaling
pub const POINT_RADIUS_METERS: f64 = 10_000.0;

/// Scale applied to the point radius
pub const POINT_RADIUS_SCALE: f64 = 5.0;

/// Smallest on-screen point radius, so points stay visible when zoomed out
pub const MIN_POINT_RADIUS_PX: f64 = 2.0;

/// Center used when the focus subset has no position to average
pub const SENTINEL_CENTER: GeoPoint = GeoPoint {
    latitude: 0.0,
    longitude: 0.0,
};

/// Edge length of a basemap tile image
pub const TILE_SIZE: f64 = 256.0;

/// Equatorial radius used by Web Mercator
const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Latitude limit of the Web Mercator square
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Map zoom, clamped to 0..=6
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 6;
    pub const DEFAULT: u8 = 3;

    /// Clamp any integer into the supported range
    pub fn new(level: i64) -> Self {
        Self(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Width of the whole world in pixels at this zoom
    ///
    /// Follows the deck.gl convention of a 512 px world at zoom 0, drawn
    /// with 256 px tiles one level deeper.
    pub fn world_size(self) -> f64 {
        512.0 * 2f64.powi(self.0 as i32)
    }

    /// Zoom of the basemap tiles drawn at this view zoom
    pub fn tile_zoom(self) -> u8 {
        self.0 + 1
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// A latitude/longitude pair in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Hover text of one map point
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub name: String,
    pub volcano_type: String,
    pub elevation: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Tooltip {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Volcano Name: {}", self.name),
            format!("Volcano Type: {}", self.volcano_type),
            format!("Elevation: {}", format_number(self.elevation)),
            format!("Lat: {}", format_number(self.latitude)),
            format!("Long: {}", format_number(self.longitude)),
        ]
    }

    /// Tooltip as a single newline-separated string
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// One plotted volcano
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapPoint {
    pub position: GeoPoint,
    pub tooltip: Tooltip,
}

/// Everything needed to draw the volcano map
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapView {
    /// Mean position of the focus subset, `None` when it has no positions
    pub center: Option<GeoPoint>,
    pub zoom: ZoomLevel,
    pub points: Vec<MapPoint>,
    /// Point radius in meters (already scaled)
    pub radius_meters: f64,
}

impl MapView {
    /// Plot every row of `points`, centered on the mean of `focus`
    pub fn build(points: &VolcanoTable, focus: &VolcanoTable, zoom: ZoomLevel) -> Self {
        let points = points
            .iter()
            .filter(|r| r.has_position())
            .map(|r| MapPoint {
                position: GeoPoint {
                    latitude: r.latitude,
                    longitude: r.longitude,
                },
                tooltip: Tooltip {
                    name: r.name.clone(),
                    volcano_type: r.volcano_type.clone(),
                    elevation: r.elevation,
                    latitude: r.latitude,
                    longitude: r.longitude,
                },
            })
            .collect();

        Self {
            center: mean_center(focus),
            zoom,
            points,
            radius_meters: POINT_RADIUS_METERS * POINT_RADIUS_SCALE,
        }
    }

    /// Center to draw at, substituting the sentinel for an empty focus
    pub fn effective_center(&self) -> GeoPoint {
        self.center.unwrap_or(SENTINEL_CENTER)
    }

    /// Viewport of the given pixel size around the effective center
    pub fn viewport(&self, width: f64, height: f64) -> Viewport {
        Viewport::new(self.effective_center(), self.zoom, width, height)
    }
}

/// Arithmetic mean of the positions in a table
pub fn mean_center(table: &VolcanoTable) -> Option<GeoPoint> {
    let (mut lat, mut lon, mut n) = (0.0, 0.0, 0usize);
    for record in table.iter().filter(|r| r.has_position()) {
        lat += record.latitude;
        lon += record.longitude;
        n += 1;
    }
    (n > 0).then(|| GeoPoint {
        latitude: lat / n as f64,
        longitude: lon / n as f64,
    })
}

/// A basemap tile placed in viewport pixels
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TileRef {
    pub z: u8,
    pub x: u32,
    pub y: u32,
    /// Top-left corner in viewport pixels
    pub left: f64,
    pub top: f64,
}

impl TileRef {
    /// Fill a `{z}/{x}/{y}` URL template
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// Web Mercator projection of a fixed-size window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: ZoomLevel,
    pub width: f64,
    pub height: f64,
    /// Center in world pixels
    center_x: f64,
    center_y: f64,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: ZoomLevel, width: f64, height: f64) -> Self {
        let (center_x, center_y) = world_pixels(center, zoom.world_size());
        Self {
            zoom,
            width,
            height,
            center_x,
            center_y,
        }
    }

    /// Viewport pixel position of a point
    pub fn project(&self, point: GeoPoint) -> (f64, f64) {
        let (x, y) = world_pixels(point, self.zoom.world_size());
        (
            x - self.center_x + self.width / 2.0,
            y - self.center_y + self.height / 2.0,
        )
    }

    /// Whether a projected position falls inside the window
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// On-screen radius of a circle of `meters` at `latitude`
    pub fn meters_to_pixels(&self, meters: f64, latitude: f64) -> f64 {
        let circumference = 2.0 * PI * EARTH_RADIUS_METERS;
        let latitude = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let meters_per_pixel =
            circumference * latitude.to_radians().cos() / self.zoom.world_size();
        (meters / meters_per_pixel).max(MIN_POINT_RADIUS_PX)
    }

    /// Basemap tiles covering the window
    ///
    /// Columns wrap around the antimeridian; rows outside the world are
    /// dropped.
    pub fn tiles(&self) -> Vec<TileRef> {
        let z = self.zoom.tile_zoom();
        let count = 1i64 << z;
        let left = self.center_x - self.width / 2.0;
        let top = self.center_y - self.height / 2.0;

        let first_col = (left / TILE_SIZE).floor() as i64;
        let last_col = ((left + self.width) / TILE_SIZE).ceil() as i64 - 1;
        let first_row = ((top / TILE_SIZE).floor() as i64).max(0);
        let last_row = ((((top + self.height) / TILE_SIZE).ceil() as i64) - 1).min(count - 1);

        let mut tiles = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                tiles.push(TileRef {
                    z,
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    left: col as f64 * TILE_SIZE - left,
                    top: row as f64 * TILE_SIZE - top,
                });
            }
        }
        tiles
    }
}

/// Web Mercator world pixel coordinates of a point
fn world_pixels(point: GeoPoint, world_size: f64) -> (f64, f64) {
    let lat = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.longitude + 180.0) / 360.0 * world_size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * world_size;
    (x, y)
}
