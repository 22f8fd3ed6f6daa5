// src/gui/pages/search.rs
use std::time::Instant;

use eframe::egui::{ self, RichText };

use crate::{
    filter::ResultView,
    gui::{ app::App, components::{ filter_bar, player_card } },
    router::{ PageKind::{ self, * }, Route },
    sync::{ QueryParams, UrlSync },
};

use super::{ Page, View };

pub struct SearchView {
    pub sync: UrlSync,
}

impl SearchView {
    pub fn mount(params: &QueryParams) -> Self {
        Self { sync: UrlSync::from_params(params) }
    }
}

pub struct SearchPage;
pub static PAGE: SearchPage = SearchPage;

impl Page for SearchPage {
    fn kind(&self) -> PageKind { Search }
    fn title(&self) -> &'static str { "Search" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, _now: Instant) {
        let catalog = app.catalog.clone();
        let View::Search(view) = &mut app.view else { return };
        let mut nav: Option<Route> = None;

        ui.heading(RichText::new("Search Players").strong());

        filter_bar::draw(ui, &mut view.sync, &catalog);

        let results = ResultView::new(&catalog, view.sync.state());
        ui.label(format!("Showing {} of {} cricketers", results.len(), results.total()));
        ui.separator();

        if results.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("🏏 No players found");
                ui.label(RichText::new("Try adjusting your search or filters").weak());
                if ui.button("Clear Filters").clicked() {
                    view.sync.clear();
                }
            });
        } else {
            ui.horizontal_wrapped(|ui| {
                for c in results.iter() {
                    if player_card::draw_card(ui, c) {
                        nav = Some(Route::profile(c.id));
                    }
                }
            });
        }

        if let Some(route) = nav {
            app.go(route);
        }
    }
}
