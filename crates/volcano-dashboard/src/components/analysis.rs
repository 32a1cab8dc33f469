//! Individual and comparative analysis
//!
//! Renders `AnalysisView` as produced by the page controller. The
//! controller already resolved stale choices, so widgets always show the
//! value the results were computed for.

use dioxus::prelude::*;
use volcano_core::{
    AnalysisMode, AnalysisView, ComparativeView, FilterMode, FilterStep, IndividualResults,
    IndividualView, SelectionState, TypeExplanation, COMPARISON_SIZE,
};

use super::{BarChart, DataTable, PieChart, SummaryPanel, VolcanoMap};

#[component]
pub fn AnalysisSection(analysis: AnalysisView, mut selection: Signal<SelectionState>) -> Element {
    let mode = match &analysis {
        AnalysisView::Individual(_) => AnalysisMode::Individual,
        AnalysisView::Comparative(_) => AnalysisMode::Comparative,
    };

    rsx! {
        section { class: "analysis",
            h2 { "Volcano Analysis" }
            fieldset { class: "radio-group",
                legend { "What kind of analysis would you like to do?" }
                for option in AnalysisMode::all().iter().copied() {
                    label { key: "{option.label()}", class: "radio",
                        input {
                            r#type: "radio",
                            name: "analysis-mode",
                            checked: option == mode,
                            onchange: move |_| selection.write().set_mode(option),
                        }
                        "{option.label()}"
                    }
                }
            }

            {match analysis {
                AnalysisView::Individual(view) => rsx! {
                    IndividualPanel { view, selection }
                },
                AnalysisView::Comparative(view) => rsx! {
                    ComparativePanel { view, selection }
                },
            }}
        }
    }
}

#[component]
fn IndividualPanel(view: IndividualView, mut selection: Signal<SelectionState>) -> Element {
    let filter_mode = view.filter_mode;
    let country = view.country.clone().unwrap_or_default();

    rsx! {
        div { class: "individual",
            fieldset { class: "radio-group",
                legend { "Filter volcanoes by" }
                for option in FilterMode::all().iter().copied() {
                    label { key: "{option.label()}", class: "radio",
                        input {
                            r#type: "radio",
                            name: "filter-mode",
                            checked: option == filter_mode,
                            onchange: move |_| selection.write().set_filter_mode(option),
                        }
                        "{option.label()}"
                    }
                }
            }

            {match &view.filter {
                FilterStep::ByRegion { regions, region, countries } => {
                    let region = region.clone().unwrap_or_default();
                    rsx! {
                        ChoiceSelect {
                            id: "analysis-region",
                            label: "Pick a region",
                            options: regions.clone(),
                            value: region,
                            onpick: move |value: String| selection.write().set_region(value),
                        }
                        ChoiceSelect {
                            id: "analysis-country",
                            label: "Pick a country in this region",
                            options: countries.clone(),
                            value: country.clone(),
                            onpick: move |value: String| selection.write().set_analysis_country(value),
                        }
                    }
                }
                FilterStep::ByCountry { countries } => rsx! {
                    ChoiceSelect {
                        id: "analysis-country",
                        label: "Pick a country",
                        options: countries.clone(),
                        value: country.clone(),
                        onpick: move |value: String| selection.write().set_analysis_country(value),
                    }
                },
            }}

            {match view.results.clone() {
                Some(results) => rsx! {
                    CountryResults { results, selection }
                },
                None => rsx! {
                    div { class: "notice", "No countries to choose from." }
                },
            }}
        }
    }
}

#[component]
fn CountryResults(results: IndividualResults, mut selection: Signal<SelectionState>) -> Element {
    let explain = results.explain;
    let volcano_type = results.volcano_type.clone().unwrap_or_default();
    let type_label = format!("Select a Volcano Type in {} for Description:", results.country);

    rsx! {
        div { class: "country-results",
            h3 { "{results.heading}" }
            DataTable { table: results.tallest.clone() }

            h3 { "Map of Volcanoes in {results.country}" }
            VolcanoMap { map: results.map.clone() }

            PieChart { chart: results.pie.clone() }

            fieldset { class: "radio-group",
                legend { "Would you like an explanation of the volcano types?" }
                for option in TypeExplanation::all().iter().copied() {
                    label { key: "{option.label()}", class: "radio",
                        input {
                            r#type: "radio",
                            name: "explain-types",
                            checked: option == explain,
                            onchange: move |_| selection.write().set_explain_types(option),
                        }
                        "{option.label()}"
                    }
                }
            }

            if explain == TypeExplanation::Yes {
                ChoiceSelect {
                    id: "analysis-type",
                    label: type_label,
                    options: results.type_options.clone(),
                    value: volcano_type,
                    onpick: move |value: String| selection.write().set_volcano_type(value),
                }
                {results.type_description.clone().map(|panel| rsx! {
                    SummaryPanel { key: "{panel.request.topic}", panel }
                })}
            }

            BarChart { chart: results.bar.clone() }
        }
    }
}

#[component]
fn ComparativePanel(view: ComparativeView, mut selection: Signal<SelectionState>) -> Element {
    let picked = view.selected.len();

    rsx! {
        div { class: "comparative",
            fieldset { class: "checkbox-group",
                legend { "Pick {COMPARISON_SIZE} countries to compare ({picked} selected)" }
                div { class: "checkbox-list",
                    for country in view.options.iter() {
                        {
                            let name = country.clone();
                            let checked = view.selected.contains(country);
                            rsx! {
                                label { key: "{country}", class: "checkbox",
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onchange: move |_| selection.write().toggle_comparison(name.clone()),
                                    }
                                    "{country}"
                                }
                            }
                        }
                    }
                }
            }

            {match &view.outcome {
                Err(e) => rsx! {
                    div { class: "notice notice-warning", "{e}" }
                },
                Ok(tables) => rsx! {
                    h3 { "Comparative Count of Volcanoes per Country" }
                    DataTable { table: tables.counts.clone() }
                    h3 { "Comparative Volcanic Characteristic by Elevation" }
                    DataTable { table: tables.elevation.clone() }
                },
            }}
        }
    }
}

/// Labelled select over string options
#[component]
fn ChoiceSelect(
    id: String,
    label: String,
    options: Vec<String>,
    value: String,
    onpick: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "control",
            label { class: "control-label", r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                class: "control-select",
                value: "{value}",
                disabled: options.is_empty(),
                onchange: move |e| onpick.call(e.value()),
                for name in options.iter() {
                    option {
                        key: "{name}",
                        value: "{name}",
                        selected: *name == value,
                        "{name}"
                    }
                }
            }
        }
    }
}
