// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::sync::Arc;

use cricdex::{ catalog::Catalog, config::{ options::Settings, state::AppState }, gui, loge };
use eframe::egui::ViewportBuilder;

fn main() {
    cricdex::log::init("info");

    let settings = Settings::load().unwrap_or_else(|e| {
        loge!("Settings: {e}; using defaults");
        Settings::default()
    });

    let catalog = match Catalog::load(&settings).or_else(|e| {
        loge!("Catalog: {e}; falling back to built-in data");
        Catalog::builtin()
    }) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Catalog failed: {e}");
            std::process::exit(1);
        }
    };

    let mut state = AppState { settings, ..AppState::default() };
    // Optional start location, e.g. `cricdex "/search?role=Bowler"`
    if let Some(location) = std::env::args().nth(1) {
        state.gui.initial_location = location;
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Cricdex")
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, catalog) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
