//! Page controller
//!
//! [`render_page`] turns the dataset and the current selection into a
//! [`PageView`]: a complete description of what the page shows, top to
//! bottom. It is pure and cheap enough to call on every interaction.
//! Encyclopedia text is not fetched here; the view lists the
//! [`LookupRequest`]s each panel needs and the UI resolves them.

use serde::Serialize;

use crate::analysis::{elevation_stats, narrow_counts, tallest, TALLEST_LIMIT};
use crate::dataset::Dataset;
use crate::error::SelectionError;
use crate::selection::{
    AnalysisMode, FilterMode, SelectionState, TypeExplanation, COMPARISON_SIZE,
};
use crate::table::VolcanoTable;
use crate::views::{BarChartView, MapView, PieChartView, TableView, ZoomLevel};

pub const PAGE_TITLE: &str = "An Intro to Volcanoes Around the World";

/// Topic of the general introduction text
pub const OVERVIEW_TOPIC: &str = "volcano";

/// Sentences in the general introduction
pub const OVERVIEW_SENTENCES: u8 = 4;

/// Sentences in volcano and volcano-type descriptions
pub const DETAIL_SENTENCES: u8 = 3;

/// A summary the page wants from the encyclopedia
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LookupRequest {
    pub topic: String,
    pub sentences: u8,
}

impl LookupRequest {
    pub fn new(topic: impl Into<String>, sentences: u8) -> Self {
        Self {
            topic: topic.into(),
            sentences,
        }
    }
}

/// A heading plus the text to fetch under it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LookupPanel {
    pub heading: String,
    pub request: LookupRequest,
}

/// Sidebar widgets with their resolved values
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SidebarView {
    pub countries: Vec<String>,
    pub country: Option<String>,
    pub volcanoes: Vec<String>,
    pub volcano: Option<String>,
    pub zoom: ZoomLevel,
}

/// The whole page, in display order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageView {
    pub title: String,
    pub sidebar: SidebarView,
    pub overview: LookupPanel,
    pub volcano_description: Option<LookupPanel>,
    pub full_table: TableView,
    pub country_counts: TableView,
    pub map: MapView,
    pub analysis: AnalysisView,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum AnalysisView {
    Individual(IndividualView),
    Comparative(ComparativeView),
}

/// Steps of the individual analysis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IndividualStage {
    ChooseFilterMode,
    FilterByRegion,
    FilterByCountry,
    ShowResults,
}

/// Country pickers of the individual analysis
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FilterStep {
    /// Region first, then a country of that region
    ByRegion {
        regions: Vec<String>,
        region: Option<String>,
        countries: Vec<String>,
    },
    /// Any country
    ByCountry { countries: Vec<String> },
}

impl FilterStep {
    /// Countries offered by this step
    pub fn countries(&self) -> &[String] {
        match self {
            FilterStep::ByRegion { countries, .. } | FilterStep::ByCountry { countries } => countries,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndividualView {
    pub filter_mode: FilterMode,
    /// Furthest stage the current choices reach
    pub stage: IndividualStage,
    pub filter: FilterStep,
    pub country: Option<String>,
    /// Present once a country is chosen
    pub results: Option<IndividualResults>,
}

/// Everything shown for the chosen country
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndividualResults {
    pub country: String,
    pub heading: String,
    pub tallest: TableView,
    pub map: MapView,
    pub pie: PieChartView,
    pub explain: TypeExplanation,
    /// Types present in the country, first-appearance order
    pub type_options: Vec<String>,
    pub volcano_type: Option<String>,
    pub type_description: Option<LookupPanel>,
    pub bar: BarChartView,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparativeView {
    pub options: Vec<String>,
    pub selected: Vec<String>,
    #[serde(skip)]
    pub outcome: Result<ComparativeTables, SelectionError>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparativeTables {
    pub counts: TableView,
    pub elevation: TableView,
}

/// Describe the page for the current selection
pub fn render_page(dataset: &Dataset, selection: &SelectionState) -> PageView {
    let index = dataset.index();
    let table = dataset.table();

    let country = resolve(&index.countries, selection.country.as_deref());
    let volcano = resolve(&index.volcano_names, selection.volcano.as_deref());
    tracing::debug!(
        country = country.as_deref().unwrap_or(""),
        volcano = volcano.as_deref().unwrap_or(""),
        mode = selection.mode.label(),
        zoom = selection.zoom.get(),
        "Rendering page"
    );

    let focus = country
        .as_deref()
        .map(|c| table.filter_country(c))
        .unwrap_or_default();
    let map = MapView::build(table, &focus, selection.zoom);

    let volcano_description = volcano.as_deref().map(|v| LookupPanel {
        heading: format!("{v} volcano short description:"),
        request: LookupRequest::new(format!("{v} Volcano"), DETAIL_SENTENCES),
    });

    let analysis = match selection.mode {
        AnalysisMode::Individual => AnalysisView::Individual(individual(dataset, selection)),
        AnalysisMode::Comparative => AnalysisView::Comparative(comparative(dataset, selection)),
    };

    PageView {
        title: PAGE_TITLE.to_string(),
        sidebar: SidebarView {
            countries: index.countries.clone(),
            country,
            volcanoes: index.volcano_names.clone(),
            volcano,
            zoom: selection.zoom,
        },
        overview: LookupPanel {
            heading: "What Are Volcanoes?".to_string(),
            request: LookupRequest::new(OVERVIEW_TOPIC, OVERVIEW_SENTENCES),
        },
        volcano_description,
        full_table: TableView::full(table),
        country_counts: TableView::counts(dataset.country_counts()),
        map,
        analysis,
    }
}

fn individual(dataset: &Dataset, selection: &SelectionState) -> IndividualView {
    let index = dataset.index();
    let table = dataset.table();

    let mut stage = IndividualStage::ChooseFilterMode;
    let mut filter = FilterStep::ByCountry {
        countries: Vec::new(),
    };
    let mut country = None;

    loop {
        stage = match stage {
            IndividualStage::ChooseFilterMode => match selection.filter_mode {
                FilterMode::Region => IndividualStage::FilterByRegion,
                FilterMode::Country => IndividualStage::FilterByCountry,
            },
            IndividualStage::FilterByRegion => {
                let region = resolve(&index.regions, selection.region.as_deref());
                let countries = region
                    .as_deref()
                    .map(|r| table.countries_in_region(r))
                    .unwrap_or_default();
                country = resolve(&countries, selection.analysis_country.as_deref());
                filter = FilterStep::ByRegion {
                    regions: index.regions.clone(),
                    region,
                    countries,
                };
                match country {
                    Some(_) => IndividualStage::ShowResults,
                    None => break,
                }
            }
            IndividualStage::FilterByCountry => {
                let countries = index.countries.clone();
                country = resolve(&countries, selection.analysis_country.as_deref());
                filter = FilterStep::ByCountry { countries };
                match country {
                    Some(_) => IndividualStage::ShowResults,
                    None => break,
                }
            }
            IndividualStage::ShowResults => break,
        };
    }

    let results = country
        .as_deref()
        .map(|c| individual_results(table, selection, c));

    IndividualView {
        filter_mode: selection.filter_mode,
        stage,
        filter,
        country,
        results,
    }
}

fn individual_results(
    table: &VolcanoTable,
    selection: &SelectionState,
    country: &str,
) -> IndividualResults {
    let subset = table.filter_country(country);
    let top = tallest(&subset, TALLEST_LIMIT);
    let type_options = subset.volcano_types();

    let volcano_type = match selection.explain_types {
        TypeExplanation::Yes => resolve(&type_options, selection.volcano_type.as_deref()),
        TypeExplanation::No => None,
    };
    let type_description = volcano_type.as_deref().map(|t| LookupPanel {
        heading: format!("{t} volcano"),
        request: LookupRequest::new(format!("{t} volcano"), DETAIL_SENTENCES),
    });

    IndividualResults {
        country: country.to_string(),
        heading: format!("Data Table of Tallest Volcanoes in {country}"),
        tallest: TableView::tallest(&top),
        // Centered on the country, plotting the whole table
        map: MapView::build(table, &subset, selection.zoom),
        pie: PieChartView::build(&subset, format!("Distinct Volcano Types in {country}")),
        explain: selection.explain_types,
        type_options,
        volcano_type,
        type_description,
        bar: BarChartView::build(&top, format!("Tallest Volcanoes in {country}")),
    }
}

fn comparative(dataset: &Dataset, selection: &SelectionState) -> ComparativeView {
    let selected = selection.comparison.clone();

    let outcome = if selected.len() != COMPARISON_SIZE {
        tracing::debug!(selected = selected.len(), "Comparison needs exactly 3 countries");
        Err(SelectionError::WrongCountryCount {
            expected: COMPARISON_SIZE,
            actual: selected.len(),
        })
    } else {
        let counts = narrow_counts(dataset.country_counts(), &selected);
        let stats = elevation_stats(dataset.table(), &selected);
        Ok(ComparativeTables {
            counts: TableView::counts(&counts),
            elevation: TableView::elevation_stats(&stats),
        })
    };

    ComparativeView {
        options: dataset.index().countries.clone(),
        selected,
        outcome,
    }
}

/// The stored choice when still offered, otherwise the first option
fn resolve(options: &[String], chosen: Option<&str>) -> Option<String> {
    chosen
        .and_then(|c| options.iter().find(|o| *o == c))
        .or_else(|| options.first())
        .cloned()
}
