// src/gui/pages/profile.rs
use std::time::Instant;

use eframe::egui::{ self, RichText };
use egui_extras::{ Column, TableBuilder };

use crate::{
    catalog::Cricketer,
    gui::{ app::{ App, Nav }, components::{ player_card::role_color, stat_counter::thousands } },
    router::{ PageKind::{ self, * }, Route },
};

use super::{ Page, View };

pub struct ProfileView {
    /// Id segment from the location, unparsed
    pub id: String,
}

impl ProfileView {
    pub fn mount(id: &str) -> Self {
        Self { id: s!(id) }
    }
}

pub struct ProfilePage;
pub static PAGE: ProfilePage = ProfilePage;

impl Page for ProfilePage {
    fn kind(&self) -> PageKind { Profile }
    fn title(&self) -> &'static str { "Profile" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, _now: Instant) {
        let catalog = app.catalog.clone();
        let View::Profile(view) = &app.view else { return };
        let mut nav: Option<Nav> = None;

        match catalog.lookup(&view.id) {
            Err(e) => {
                logd!("Profile: {}", e);
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.heading("🏏 Player not found");
                    ui.label(RichText::new("The player you're looking for doesn't exist.").weak());
                    if ui.button("Browse Players").clicked() {
                        nav = Some(Nav::Push(Route::Search(Default::default())));
                    }
                });
            }
            Ok(player) => {
                let can_back = app.history.can_go_back();
                if ui.button("← Back").clicked() {
                    nav = Some(if can_back {
                        Nav::Back
                    } else {
                        Nav::Push(Route::Search(Default::default()))
                    });
                }
                draw_player(ui, player);
            }
        }

        if let Some(nav) = nav {
            app.request(nav);
        }
    }
}

fn draw_player(ui: &mut egui::Ui, p: &Cricketer) {
    ui.heading(RichText::new(&p.name).size(30.0).strong());
    ui.horizontal(|ui| {
        ui.label(format!("{} {}", p.flag, p.country));
        ui.label(RichText::new(p.role.as_str()).color(role_color(p.role)));
        ui.label(RichText::new(format!("Debut {}", p.stats.debut)).weak());
    });
    ui.add_space(8.0);
    ui.label(p.bio.as_str());
    ui.separator();

    ui.heading("Career Stats");
    let s = &p.stats;
    let rows: [(&str, String); 8] = [
        ("Matches", s.matches.to_string()),
        ("Runs", thousands(s.runs.into())),
        ("Wickets", s.wickets.to_string()),
        ("Centuries", s.centuries.to_string()),
        ("Half-centuries", s.half_centuries.to_string()),
        ("Average", format!("{:.2}", s.average)),
        ("Strike Rate", format!("{:.2}", s.strike_rate)),
        ("Highest Score", s.highest_score.clone()),
    ];
    egui::Grid::new("career_stats")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (label, value) in rows {
                ui.label(RichText::new(label).weak());
                ui.label(RichText::new(value).strong());
                ui.end_row();
            }
        });
    ui.separator();

    if !p.highlights.is_empty() {
        ui.heading("Career Highlights");
        for h in &p.highlights {
            ui.label(format!("⭐ {h}"));
        }
        ui.separator();
    }

    if !p.recent_matches.is_empty() {
        ui.heading("Recent Matches");
        TableBuilder::new(ui)
            .id_salt("recent_matches")
            .striped(true)
            .vscroll(false)
            .column(Column::initial(220.0).at_least(120.0))
            .columns(Column::auto().at_least(60.0), 4)
            .header(22.0, |mut header| {
                for title in ["Match", "Format", "Score", "Result", "Year"] {
                    header.col(|ui| { ui.strong(title); });
                }
            })
            .body(|mut body| {
                for m in &p.recent_matches {
                    body.row(20.0, |mut row| {
                        row.col(|ui| { ui.label(m.label.as_str()); });
                        row.col(|ui| { ui.label(m.format.as_str()); });
                        row.col(|ui| { ui.label(m.score.as_str()); });
                        row.col(|ui| { ui.label(m.result.as_str()); });
                        row.col(|ui| { ui.label(m.year.to_string()); });
                    });
                }
            });
    }
}
