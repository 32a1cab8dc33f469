use dioxus::prelude::*;
use volcano_core::TableView;

/// Scrollable table of display strings
#[component]
pub fn DataTable(
    table: TableView,
    /// Cap on the visible height before scrolling
    #[props(default = 420)]
    max_height: u32,
) -> Element {
    if table.is_empty() {
        return rsx! {
            div { class: "table-empty", "No rows" }
        };
    }

    rsx! {
        div {
            class: "table-wrapper",
            style: "max-height: {max_height}px;",
            table { class: "data-table",
                thead {
                    tr {
                        th { class: "row-index" }
                        for column in table.columns.iter() {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    for (i, row) in table.rows.iter().enumerate() {
                        tr { key: "{i}",
                            td { class: "row-index", "{i}" }
                            for cell in row.iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
