// src/gui/app.rs
use std::{
    error::Error,
    sync::Arc,
    time::Instant,
};

use eframe::egui;

use crate::{
    catalog::Catalog,
    config::state::{ AppState, Theme },
    router::{ History, PageKind, Route },
};

use super::{
    components,
    pages::View,
    router,
};

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    catalog: Arc<Catalog>,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Cricdex",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui_theme(state.gui.theme));
            Ok(Box::new(App::new(state, catalog)))
        }),
    )?;
    Ok(())
}

pub fn egui_theme(theme: Theme) -> egui::Theme {
    match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    }
}

/// Navigation requested during a frame; applied once the frame is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nav {
    Push(Route),
    Back,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once at startup, read-only for the process lifetime
    pub catalog: Arc<Catalog>,

    // external representation of where we are
    pub history: History,

    // live state of the mounted page; replaced on every navigation
    pub view: View,

    pending: Option<Nav>,
}

impl App {
    pub fn new(state: AppState, catalog: Arc<Catalog>) -> Self {
        let history = History::new(Route::parse(&state.gui.initial_location));
        let view = View::mount(history.current(), &catalog, &state.settings, Instant::now());

        logf!("Init: catalog={}, location={}", catalog.len(), history.location());

        Self {
            state,
            catalog,
            history,
            view,
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_kind(&self) -> PageKind { self.history.current().kind() }

    /// Queue a navigation. The last request in a frame wins.
    #[inline]
    pub fn request(&mut self, nav: Nav) { self.pending = Some(nav); }

    #[inline]
    pub fn go(&mut self, route: Route) { self.request(Nav::Push(route)); }

    /// End of frame: persist search state, then move if asked to.
    fn settle(&mut self, ctx: &egui::Context, now: Instant) {
        if let View::Search(search) = &mut self.view {
            search.sync.flush(&mut self.history);
        }

        if let Some(nav) = self.pending.take() {
            let moved = match nav {
                Nav::Push(route) => {
                    logf!("Nav: {} → {}", self.history.location(), route.to_location());
                    self.history.push(route);
                    true
                }
                Nav::Back => self.history.back(),
            };
            if moved {
                self.remount(now);
                ctx.request_repaint();
            }
        }

        if let Some(wait) = self.view.repaint_after(now) {
            ctx.request_repaint_after(wait);
        }
    }

    /// Rebuild the view for the current entry. Dropping the old view
    /// cancels whatever timers it held.
    fn remount(&mut self, now: Instant) {
        self.view = View::mount(self.history.current(), &self.catalog, &self.state.settings, now);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::nav_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    router::page_for(self.view.kind()).draw(ui, self, now);
                });
        });

        self.settle(ctx, now);
    }
}
