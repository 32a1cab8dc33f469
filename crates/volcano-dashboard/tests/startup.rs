//! Startup wiring: config resolution and context building

use std::io::Write;

use clap::Parser;
use volcano_dashboard::theme::Theme;
use volcano_dashboard::{AppContext, CliArgs, DashboardConfig};

#[test]
fn test_config_file_then_flags() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[data]
path = "from-file.xlsx"
banner = "from-file.jpg"

[ui]
theme = "light"

[map]
tile_url = "https://tiles.example.org/{{z}}/{{x}}/{{y}}.png"
"#
    )
    .unwrap();

    let config_path = file.path().to_string_lossy().to_string();
    let args = CliArgs::parse_from(["volcano-atlas", "--config", &config_path, "--data", "cli.xlsx"]);
    let config = DashboardConfig::resolve(&args).unwrap();

    assert_eq!(config.data.path.to_string_lossy(), "cli.xlsx");
    assert_eq!(config.data.banner.to_string_lossy(), "from-file.jpg");
    assert_eq!(config.ui.theme, Theme::Light);
    assert_eq!(config.map.tile_url, "https://tiles.example.org/{z}/{x}/{y}.png");
}

#[test]
fn test_missing_dataset_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = DashboardConfig::default();
    config.data.path = dir.path().join("Volcanoes Dataset.xlsx");
    config.lookup.offline = true;

    let err = match AppContext::build(&config) {
        Ok(_) => panic!("dataset should be required"),
        Err(e) => e,
    };
    let message = format!("{err:#}");
    assert!(message.contains("Failed to load dataset"));
    assert!(message.contains("not found"), "{message}");
}
