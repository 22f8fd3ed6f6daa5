// src/gui/components/nav_bar.rs
//
// Top bar: brand, page links, back button, theme toggle and the current
// location (the address bar of this app).

use eframe::egui::{ self, RichText };

use crate::gui::{ app::{ egui_theme, App, Nav }, router };
use crate::router::{ PageKind, Route };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(RichText::new("🏏 Cricdex").strong().size(18.0));
        ui.separator();

        let current = app.current_kind();
        for page in router::nav_pages() {
            let selected = page.kind() == current;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let route = match page.kind() {
                    PageKind::Search => Route::Search(Default::default()),
                    _ => Route::Home,
                };
                app.go(route);
            }
        }

        ui.separator();

        let can_back = app.history.can_go_back();
        if ui.add_enabled(can_back, egui::Button::new("⬅ Back")).clicked() {
            app.request(Nav::Back);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme = app.state.gui.theme;
            if ui.button(theme.toggle_label()).clicked() {
                app.state.gui.theme = theme.toggled();
                ui.ctx().set_theme(egui_theme(app.state.gui.theme));
                logd!("Theme: {:?}", app.state.gui.theme);
            }
            ui.separator();
            ui.monospace(app.history.location());
        });
    });
}
