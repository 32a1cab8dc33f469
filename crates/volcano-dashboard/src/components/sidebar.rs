use dioxus::prelude::*;
use volcano_core::{SelectionState, SidebarView, ZoomLevel};

use crate::theme::ThemeSwitcher;

/// Intro controls: map country, described volcano, zoom
#[component]
pub fn Sidebar(sidebar: SidebarView, mut selection: Signal<SelectionState>) -> Element {
    let country = sidebar.country.clone().unwrap_or_default();
    let volcano = sidebar.volcano.clone().unwrap_or_default();
    let zoom = sidebar.zoom.get();
    let (min_zoom, max_zoom) = (ZoomLevel::MIN, ZoomLevel::MAX);

    rsx! {
        aside { class: "sidebar",
            h2 { class: "sidebar-title", "Explore" }

            div { class: "control",
                label { class: "control-label", r#for: "sidebar-country", "Pick a country to center the map on" }
                select {
                    id: "sidebar-country",
                    class: "control-select",
                    value: "{country}",
                    onchange: move |e| selection.write().set_country(e.value()),
                    for name in sidebar.countries.iter() {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: *name == country,
                            "{name}"
                        }
                    }
                }
            }

            div { class: "control",
                label { class: "control-label", r#for: "sidebar-volcano", "Pick a volcano to read about" }
                select {
                    id: "sidebar-volcano",
                    class: "control-select",
                    value: "{volcano}",
                    onchange: move |e| selection.write().set_volcano(e.value()),
                    for name in sidebar.volcanoes.iter() {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: *name == volcano,
                            "{name}"
                        }
                    }
                }
            }

            div { class: "control",
                label { class: "control-label", r#for: "sidebar-zoom", "Map zoom: {zoom}" }
                input {
                    id: "sidebar-zoom",
                    class: "control-range",
                    r#type: "range",
                    min: "{min_zoom}",
                    max: "{max_zoom}",
                    step: "1",
                    value: "{zoom}",
                    oninput: move |e| {
                        if let Ok(level) = e.value().parse::<i64>() {
                            selection.write().set_zoom(level);
                        }
                    },
                }
            }

            div { class: "sidebar-footer", ThemeSwitcher {} }
        }
    }
}
