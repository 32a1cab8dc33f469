//! Shared, read-only application context

use std::sync::Arc;

use anyhow::Context;
use volcano_core::Dataset;
use volcano_lookup::SummarySource;

use crate::banner::load_banner;
use crate::config::{DashboardConfig, MapConfig};
use crate::theme::Theme;

/// Everything built before the window opens
///
/// Provided to the component tree with `LaunchBuilder::with_context` and
/// read with `use_context::<AppContext>()`.
#[derive(Clone)]
pub struct AppContext {
    pub dataset: Arc<Dataset>,
    pub lookup: Arc<dyn SummarySource>,
    /// Banner image as a `data:` URL
    pub banner: Option<String>,
    pub map: MapConfig,
    pub initial_theme: Theme,
}

impl AppContext {
    /// Load the dataset and wire up the lookup source
    ///
    /// A dataset that cannot be loaded is fatal; a missing banner is not.
    pub fn build(config: &DashboardConfig) -> anyhow::Result<Self> {
        let dataset = Dataset::load(&config.data.path)
            .with_context(|| format!("Failed to load dataset {}", config.data.path.display()))?;

        let lookup = volcano_lookup::build_source(&config.lookup)
            .context("Failed to set up encyclopedia lookups")?;

        Ok(Self {
            dataset: Arc::new(dataset),
            lookup,
            banner: load_banner(&config.data.banner),
            map: config.map.clone(),
            initial_theme: config.ui.theme,
        })
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dataset, &other.dataset) && Arc::ptr_eq(&self.lookup, &other.lookup)
    }
}
