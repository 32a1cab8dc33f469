//! Basalt (dark) and Ash (light) color schemes
//!
//! The active scheme lives in a global signal and is applied through a
//! `data-theme` attribute on the root element; `assets/themes.css` maps
//! each attribute value to a set of CSS variables.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    /// Value of the `data-theme` attribute
    pub fn attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Palette name shown on the switcher
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Basalt",
            Theme::Light => "Ash",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr())
    }
}

/// Accepts `dark`/`light` or the palette names, any case
impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.attr().eq_ignore_ascii_case(s) || t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown theme {s:?} (expected dark or light)"))
    }
}

pub static CURRENT_THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// One toggle button per palette
#[component]
pub fn ThemeSwitcher() -> Element {
    let active = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher", role: "group", "aria-label": "Color scheme",
            for theme in Theme::ALL {
                button {
                    key: "{theme}",
                    class: if theme == active { "theme-button active" } else { "theme-button" },
                    "aria-pressed": theme == active,
                    onclick: move |_| *CURRENT_THEME.write() = theme,
                    {theme.name()}
                }
            }
        }
    }
}

/// Applies the active scheme to everything below it
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = CURRENT_THEME.read().attr();

    rsx! {
        div { class: "themed-root", "data-theme": theme, {children} }
    }
}
