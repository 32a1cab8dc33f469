//! Volcano Atlas desktop dashboard
//!
//! A Dioxus desktop shell over [`volcano_core`]: the binary loads the
//! dataset and configuration, then every interaction updates a
//! `SelectionState` and re-renders the `PageView` it produces.

pub mod app;
pub mod banner;
pub mod components;
pub mod config;
pub mod context;
pub mod theme;

pub use app::App;
pub use config::{CliArgs, DashboardConfig};
pub use context::AppContext;

/// Palette variables for both color schemes
pub const THEME_CSS: &str = include_str!("../assets/themes.css");

/// Layout and component styles
pub const STYLE_CSS: &str = include_str!("../assets/style.css");
