// src/gui/components/player_card.rs
//
// Player tiles: the small card in the search grid and the large slide in
// the home carousel. Both return true when "View Profile" was clicked.

use eframe::egui::{ self, RichText };

use crate::catalog::Cricketer;

use super::stat_counter::thousands;

pub fn role_color(role: crate::catalog::Role) -> egui::Color32 {
    use crate::catalog::Role::*;
    match role {
        Batsman      => egui::Color32::from_rgb(0x3B, 0x82, 0xF6),
        Bowler       => egui::Color32::from_rgb(0xEF, 0x44, 0x44),
        AllRounder   => egui::Color32::from_rgb(0x10, 0xB9, 0x81),
        WicketKeeper => egui::Color32::from_rgb(0xF5, 0x9E, 0x0B),
    }
}

pub fn draw_card(ui: &mut egui::Ui, c: &Cricketer) -> bool {
    let mut open = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(220.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(&c.name).strong().size(16.0));
            ui.label(format!("{} {}", c.flag, c.country));
            ui.label(RichText::new(c.role.as_str()).color(role_color(c.role)));
            ui.horizontal(|ui| {
                ui.label(format!("{} M", c.stats.matches));
                ui.label(format!("{} R", thousands(c.stats.runs.into())));
                ui.label(format!("{} W", c.stats.wickets));
            });
            if ui.button("View Profile").clicked() {
                open = true;
            }
        });
    });
    open
}

pub fn draw_featured(ui: &mut egui::Ui, c: &Cricketer) -> bool {
    let mut open = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical(|ui| {
            ui.label(RichText::new(c.role.as_str()).color(role_color(c.role)));
            ui.heading(RichText::new(&c.name).size(26.0).strong());
            ui.label(format!("{} {}", c.flag, c.country));
            ui.label(c.bio.as_str());
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for (val, lbl) in [
                    (c.stats.matches.to_string(), "Matches"),
                    (thousands(c.stats.runs.into()), "Runs"),
                    (c.stats.wickets.to_string(), "Wickets"),
                    (format!("{:.1}", c.stats.average), "Average"),
                ] {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(val).strong());
                            ui.label(RichText::new(lbl).weak().small());
                        });
                    });
                }
            });
            ui.add_space(6.0);
            if ui.button("View Full Profile →").clicked() {
                open = true;
            }
        });
    });
    open
}
