// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::Settings;

/// Colour scheme, session only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button caption: the scheme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀ Light",
            Theme::Light => "🌙 Dark",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,
    pub theme: Theme,

    /// Location opened at startup (e.g. "/search?role=Bowler")
    pub initial_location: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            theme: Theme::default(),
            initial_location: s!("/"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    pub gui: GuiState,
}
