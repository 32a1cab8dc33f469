//! Volcano scatter map over slippy-map tiles
//!
//! Projection happens in `volcano_core::views::map`; this component only
//! positions tile images and point markers in a fixed-size window.

use dioxus::prelude::*;
use volcano_core::MapView;

use crate::context::AppContext;

#[component]
pub fn VolcanoMap(map: MapView) -> Element {
    let ctx = use_context::<AppContext>();
    let settings = &ctx.map;

    let viewport = map.viewport(settings.width, settings.height);
    let radius_meters = settings.point_radius_meters.unwrap_or(map.radius_meters);

    let tiles: Vec<Placed> = if settings.tiles_enabled() {
        viewport
            .tiles()
            .into_iter()
            .map(|tile| Placed {
                key: format!("{}/{}/{}@{:.0}", tile.z, tile.x, tile.y, tile.left),
                left: tile.left,
                top: tile.top,
                size: volcano_core::views::map::TILE_SIZE,
                text: tile.url(&settings.tile_url),
            })
            .collect()
    } else {
        Vec::new()
    };

    // Only markers that overlap the window are drawn
    let markers: Vec<Placed> = map
        .points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            let (x, y) = viewport.project(point.position);
            let r = viewport.meters_to_pixels(radius_meters, point.position.latitude);
            let visible = x + r >= 0.0
                && y + r >= 0.0
                && x - r <= viewport.width
                && y - r <= viewport.height;
            visible.then(|| Placed {
                key: i.to_string(),
                left: x - r,
                top: y - r,
                size: 2.0 * r,
                text: point.tooltip.text(),
            })
        })
        .collect();

    let in_view = map
        .points
        .iter()
        .filter(|p| viewport.contains(viewport.project(p.position)))
        .count();
    let total = map.points.len();
    let zoom = map.zoom.get();
    let center = map.effective_center();
    let (lat, lon) = (center.latitude, center.longitude);
    let (width, height) = (settings.width, settings.height);
    let show_attribution = settings.tiles_enabled();

    rsx! {
        div { class: "map-card",
            div {
                class: "map-container",
                style: "width: {width}px; height: {height}px;",

                for tile in tiles {
                    img {
                        key: "{tile.key}",
                        class: "map-tile",
                        src: "{tile.text}",
                        style: "{tile.style()}",
                        draggable: "false",
                        alt: "",
                    }
                }

                for marker in markers {
                    div {
                        key: "{marker.key}",
                        class: "map-point",
                        title: "{marker.text}",
                        style: "{marker.style()}",
                    }
                }
            }
            div { class: "map-caption",
                "{in_view} of {total} volcanoes in view · centered on {lat:.2}°, {lon:.2}° · zoom {zoom}"
                if map.center.is_none() {
                    span { class: "map-caption-warning", " (no positions to center on)" }
                }
            }
            if show_attribution {
                div { class: "map-attribution", "Map tiles © OpenStreetMap contributors" }
            }
        }
    }
}

/// Something absolutely positioned in the map window
struct Placed {
    key: String,
    left: f64,
    top: f64,
    size: f64,
    /// Tile URL or marker tooltip
    text: String,
}

impl Placed {
    fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px;",
            self.left, self.top, self.size, self.size
        )
    }
}
