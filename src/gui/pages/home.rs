// src/gui/pages/home.rs
//
// Landing page: hero search, role shortcuts, stat counters, featured
// carousel and a way into the full list.

use std::time::{ Duration, Instant };

use eframe::egui::{ self, RichText };

use crate::{
    anim::{ Carousel, CountUp, Scoped },
    catalog::Catalog,
    config::options::Settings,
    gui::{ app::App, components::{ player_card, stat_counter } },
    router::{ PageKind::{ self, * }, Route },
};

use super::{ Page, View };

/// Quick-filter shortcut labels, as shown.
pub const ROLE_SHORTCUTS: [&str; 4] = ["Batsmen", "Bowlers", "All-rounders", "Wicket-keepers"];

pub struct StatCounter {
    pub label: &'static str,
    pub anim: Scoped<CountUp>,
}

pub struct HomeView {
    /// Hero search box text (submitted explicitly)
    pub query: String,
    pub featured_count: usize,
    pub carousel: Scoped<Carousel>,
    pub counters: Vec<StatCounter>,
}

impl HomeView {
    pub fn mount(catalog: &Catalog, settings: &Settings, now: Instant) -> Self {
        let featured_count = catalog.featured(settings.featured_count).len();
        let mut carousel = Carousel::new(featured_count, settings.carousel_period());
        carousel.start(now);

        let stats = catalog.quick_stats();
        let counters = [
            ("Players", stats.total_players),
            ("Countries", stats.countries),
            ("Total Centuries", stats.total_centuries),
            ("Total Wickets", stats.total_wickets),
        ]
        .into_iter()
        .map(|(label, target)| StatCounter {
            label,
            anim: Scoped::new(CountUp::new(target, settings.count_up_duration())),
        })
        .collect();

        Self {
            query: s!(),
            featured_count: settings.featured_count,
            carousel: Scoped::new(carousel),
            counters,
        }
    }

    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if self.counters.iter().any(|c| c.anim.is_running()) {
            return Some(Duration::ZERO);
        }
        self.carousel.time_until_next(now)
    }
}

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

impl Page for HomePage {
    fn kind(&self) -> PageKind { Home }
    fn title(&self) -> &'static str { "Home" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, now: Instant) {
        let catalog = app.catalog.clone();
        let View::Home(view) = &mut app.view else { return };
        let mut nav: Option<Route> = None;

        // ── Hero ──
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new("🏆 World's Greatest Cricketers").weak());
            ui.heading(RichText::new("Discover Cricket Legends").size(32.0).strong());
            ui.label(format!(
                "Explore stats, career highlights, and profiles of {} international stars",
                catalog.len()
            ));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut view.query)
                        .hint_text("Search cricketers, countries, roles...")
                        .desired_width(360.0),
                );
                let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("🔍 Search").clicked() || submitted {
                    nav = Some(Route::search_for(&view.query));
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                for label in ROLE_SHORTCUTS {
                    if ui.button(label).clicked() {
                        nav = Some(Route::role_shortcut(label));
                    }
                }
            });
        });

        ui.add_space(16.0);
        ui.separator();

        // ── Stats ──
        ui.horizontal(|ui| {
            for counter in view.counters.iter_mut() {
                let value = counter.anim.tick(now);
                let rect = stat_counter::draw(ui, counter.label, value);
                counter.anim.on_visibility(stat_counter::is_shown(ui.clip_rect(), rect), now);
            }
        });

        ui.add_space(16.0);
        ui.separator();

        // ── Featured carousel ──
        let featured = catalog.featured(view.featured_count);
        view.carousel.set_len(featured.len());
        view.carousel.tick(now);

        ui.horizontal(|ui| {
            ui.heading("Featured Players");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶").on_hover_text("Next").clicked() {
                    view.carousel.next();
                }
                if ui.button("◀").on_hover_text("Previous").clicked() {
                    view.carousel.prev();
                }
            });
        });

        if let Some(player) = view.carousel.current(featured) {
            if player_card::draw_featured(ui, player) {
                nav = Some(Route::profile(player.id));
            }
        }

        ui.horizontal(|ui| {
            let active = view.carousel.index();
            for i in 0..view.carousel.len() {
                let dot = if i == active { "●" } else { "○" };
                if ui.selectable_label(i == active, dot)
                    .on_hover_text(format!("Slide {}", i + 1))
                    .clicked()
                {
                    view.carousel.jump(i);
                }
            }
        });

        ui.add_space(16.0);
        ui.separator();

        // ── Browse all ──
        ui.vertical_centered(|ui| {
            ui.heading(format!("Browse All {} Cricketers", catalog.len()));
            ui.label("Filter by country, role, and search for your favorites");
            if ui.button("🔍 Explore Players").clicked() {
                nav = Some(Route::Search(Default::default()));
            }
        });

        if let Some(route) = nav {
            app.go(route);
        }
    }
}
