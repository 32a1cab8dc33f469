use dioxus::prelude::*;
use volcano_core::{render_page, SelectionState};

use crate::components::*;
use crate::context::AppContext;
use crate::theme::{ThemedRoot, CURRENT_THEME};

/// Root App component for the volcano dashboard
///
/// Holds the session's `SelectionState` and recomputes the page view from
/// it whenever it changes:
/// - Intro: overview text, volcano description, full table, counts, map
/// - Analysis: individual country deep dive or three-country comparison
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    use_hook(|| *CURRENT_THEME.write() = ctx.initial_theme);

    let dataset = ctx.dataset.clone();
    let selection = use_signal(|| SelectionState::new(dataset.index()));

    let dataset = ctx.dataset.clone();
    let page = use_memo(move || render_page(&dataset, &selection.read()));
    let page = page.read();

    rsx! {
        ThemedRoot {
            div { class: "app-layout",
                Sidebar { sidebar: page.sidebar.clone(), selection }

                main { class: "content",
                    h1 { class: "page-title", "{page.title}" }
                    {ctx.banner.as_deref().map(|banner| rsx! {
                        img { class: "banner", src: "{banner}", alt: "Volcanoes" }
                    })}

                    SummaryPanel { key: "{page.overview.request.topic}", panel: page.overview.clone() }
                    {page.volcano_description.clone().map(|panel| rsx! {
                        SummaryPanel { key: "{panel.request.topic}", panel }
                    })}

                    section { class: "intro-section",
                        h2 { "Complete Set of Volcanic Information" }
                        DataTable { table: page.full_table.clone() }
                    }

                    section { class: "intro-section",
                        h2 { "Number of Volcanoes per Country" }
                        DataTable { table: page.country_counts.clone() }
                    }

                    section { class: "intro-section",
                        h2 { "Global Volcano Map with Tool Tips" }
                        VolcanoMap { map: page.map.clone() }
                    }

                    AnalysisSection { analysis: page.analysis.clone(), selection }
                }
            }
        }
    }
}
