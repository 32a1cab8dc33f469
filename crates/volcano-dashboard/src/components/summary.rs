use dioxus::prelude::*;
use volcano_core::LookupPanel;

use crate::context::AppContext;

/// Heading plus an encyclopedia summary fetched in the background
///
/// The lookup starts when the panel mounts; callers key the panel by topic
/// so a new topic remounts it. A failed lookup shows a notice here and
/// nowhere else.
#[component]
pub fn SummaryPanel(panel: LookupPanel) -> Element {
    let ctx = use_context::<AppContext>();
    let request = panel.request.clone();
    let topic = panel.request.topic.clone();

    let summary = use_resource(move || {
        let source = ctx.lookup.clone();
        let request = request.clone();
        async move { source.summary(&request).await }
    });

    rsx! {
        section { class: "summary-panel",
            h3 { class: "summary-heading", "{panel.heading}" }
            {match &*summary.read() {
                None => rsx! {
                    p { class: "summary-loading", "Looking up “{topic}”…" }
                },
                Some(Ok(text)) => rsx! {
                    p { class: "summary-text", "{text}" }
                },
                Some(Err(e)) => rsx! {
                    div { class: "notice notice-warning",
                        "Could not load a summary for “{topic}”: {e}"
                    }
                },
            }}
        }
    }
}
