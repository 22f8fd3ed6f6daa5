// src/gui/components/filter_bar.rs
//
// Search page controls. Every widget edits a local copy of the facet and
// hands it to the sync, which decides whether anything changed.

use eframe::egui;

use crate::catalog::{ Catalog, Role };
use crate::sync::UrlSync;

const ALL_COUNTRIES: &str = "All Countries";
const ALL_ROLES: &str = "All Roles";

pub fn draw(ui: &mut egui::Ui, sync: &mut UrlSync, catalog: &Catalog) {
    ui.horizontal_wrapped(|ui| {
        let mut query = sync.state().query.clone();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search by name, country, role...")
                .desired_width(280.0),
        );
        if resp.changed() {
            sync.set_query(query);
        }

        let mut country = sync.state().country.clone();
        let shown = if country.is_empty() { ALL_COUNTRIES } else { country.as_str() };
        egui::ComboBox::from_id_salt("filter_country")
            .selected_text(shown.to_owned())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut country, s!(), ALL_COUNTRIES);
                for c in catalog.countries() {
                    ui.selectable_value(&mut country, c.clone(), c.as_str());
                }
            });
        sync.set_country(country);

        let mut role = sync.state().role.clone();
        let shown = if role.is_empty() { ALL_ROLES } else { role.as_str() };
        egui::ComboBox::from_id_salt("filter_role")
            .selected_text(shown.to_owned())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut role, s!(), ALL_ROLES);
                for r in Role::ALL {
                    ui.selectable_value(&mut role, s!(r.as_str()), r.as_str());
                }
            });
        sync.set_role(role);

        if sync.state().has_filters() && ui.button("✖ Clear").clicked() {
            sync.clear();
        }
    });

    draw_chips(ui, sync);
}

/// One removable chip per active facet.
fn draw_chips(ui: &mut egui::Ui, sync: &mut UrlSync) {
    let state = sync.state().clone();
    if !state.has_filters() {
        return;
    }

    ui.horizontal_wrapped(|ui| {
        if !state.query.is_empty() && ui.button(format!("🔍 {} ✕", state.query)).clicked() {
            sync.set_query("");
        }
        if !state.country.is_empty() && ui.button(format!("🌍 {} ✕", state.country)).clicked() {
            sync.set_country("");
        }
        if !state.role.is_empty() && ui.button(format!("🏏 {} ✕", state.role)).clicked() {
            sync.set_role("");
        }
    });
}
