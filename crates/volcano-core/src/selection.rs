//! The user's current choices for one session

use serde::{Deserialize, Serialize};

use crate::index::CategoryIndex;
use crate::views::ZoomLevel;

/// Countries a comparative analysis needs
pub const COMPARISON_SIZE: usize = 3;

/// Top-level analysis choice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMode {
    #[default]
    Individual,
    Comparative,
}

impl AnalysisMode {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Individual => "Individual Analysis",
            AnalysisMode::Comparative => "Comparative Analysis",
        }
    }

    pub fn all() -> &'static [AnalysisMode] {
        &[AnalysisMode::Individual, AnalysisMode::Comparative]
    }
}

/// How the individual analysis narrows down to a country
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterMode {
    #[default]
    Region,
    Country,
}

impl FilterMode {
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::Region => "Region",
            FilterMode::Country => "Country",
        }
    }

    pub fn all() -> &'static [FilterMode] {
        &[FilterMode::Region, FilterMode::Country]
    }
}

/// Whether the user wants the volcano type explained
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeExplanation {
    #[default]
    Yes,
    No,
}

impl TypeExplanation {
    pub fn label(&self) -> &'static str {
        match self {
            TypeExplanation::Yes => "Yes, I wouldn't mind a refresher.",
            TypeExplanation::No => "No, I'm a genius and already know everything!",
        }
    }

    pub fn all() -> &'static [TypeExplanation] {
        &[TypeExplanation::Yes, TypeExplanation::No]
    }
}

/// Everything the user has picked so far
///
/// Choices are stored as made; the page controller falls back to the first
/// valid option whenever a stored choice is missing or no longer offered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    /// Sidebar country, used to center the intro map
    pub country: Option<String>,
    /// Sidebar volcano, described by the encyclopedia lookup
    pub volcano: Option<String>,
    pub zoom: ZoomLevel,
    pub mode: AnalysisMode,
    pub filter_mode: FilterMode,
    pub region: Option<String>,
    pub analysis_country: Option<String>,
    pub explain_types: TypeExplanation,
    pub volcano_type: Option<String>,
    /// Countries picked for comparison, in the order they were picked
    pub comparison: Vec<String>,
}

impl SelectionState {
    /// Session defaults for a dataset
    pub fn new(index: &CategoryIndex) -> Self {
        Self {
            country: index.default_country().map(str::to_string),
            volcano: index.default_volcano().map(str::to_string),
            ..Self::default()
        }
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = Some(country.into());
    }

    pub fn set_volcano(&mut self, volcano: impl Into<String>) {
        self.volcano = Some(volcano.into());
    }

    pub fn set_zoom(&mut self, level: i64) {
        self.zoom = ZoomLevel::new(level);
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }

    /// Switching filter mode starts the country choice over
    pub fn set_filter_mode(&mut self, filter_mode: FilterMode) {
        if self.filter_mode != filter_mode {
            self.filter_mode = filter_mode;
            self.analysis_country = None;
            self.volcano_type = None;
        }
    }

    /// A new region invalidates the country and type picked under the old one
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        if self.region.as_deref() != Some(region.as_str()) {
            self.region = Some(region);
            self.analysis_country = None;
            self.volcano_type = None;
        }
    }

    pub fn set_analysis_country(&mut self, country: impl Into<String>) {
        let country = country.into();
        if self.analysis_country.as_deref() != Some(country.as_str()) {
            self.analysis_country = Some(country);
            self.volcano_type = None;
        }
    }

    pub fn set_explain_types(&mut self, explain: TypeExplanation) {
        self.explain_types = explain;
    }

    pub fn set_volcano_type(&mut self, volcano_type: impl Into<String>) {
        self.volcano_type = Some(volcano_type.into());
    }

    /// Add a country to the comparison, or remove it if already picked
    pub fn toggle_comparison(&mut self, country: impl Into<String>) {
        let country = country.into();
        match self.comparison.iter().position(|c| *c == country) {
            Some(pos) => {
                self.comparison.remove(pos);
            }
            None => self.comparison.push(country),
        }
    }

    pub fn set_comparison(&mut self, countries: Vec<String>) {
        self.comparison.clear();
        for country in countries {
            if !self.comparison.contains(&country) {
                self.comparison.push(country);
            }
        }
    }
}
