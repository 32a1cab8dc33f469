//! Volcano Atlas - Main entry point
//!
//! Usage:
//!   volcano-atlas
//!   volcano-atlas --data "Volcanoes Dataset.xlsx" --theme light
//!   volcano-atlas --config volcano-atlas.toml --offline

use std::process::ExitCode;

use clap::Parser;
use dioxus::prelude::*;

use volcano_dashboard::{App, AppContext, CliArgs, DashboardConfig, STYLE_CSS, THEME_CSS};
use volcano_logging::VolcanoSubscriberBuilder;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match DashboardConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // Keep the guard alive so file logs are flushed on exit
    let _log_guard = match VolcanoSubscriberBuilder::new()
        .with_config(config.logging.clone())
        .init()
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let context = match AppContext::build(&config) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Startup failed");
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("An Intro to Volcanoes Around the World")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1400.0, 900.0))
                        .with_resizable(true),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    THEME_CSS, STYLE_CSS
                )),
        )
        .with_context(context)
        .launch(App);

    ExitCode::SUCCESS
}
