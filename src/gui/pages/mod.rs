// src/gui/pages/mod.rs
use std::time::{ Duration, Instant };

use eframe::egui;

use crate::{
    catalog::Catalog,
    config::options::Settings,
    router::{ PageKind, Route },
};

use super::app::App;

pub mod home;
pub mod profile;
pub mod search;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page. Navigation goes through `app.request`/`app.go` so the
    /// current view stays alive until the frame is done.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App, now: Instant);
}

/// Live state of the mounted page. Built from the current history entry on
/// every navigation and dropped on the next one.
pub enum View {
    Home(home::HomeView),
    Search(search::SearchView),
    Profile(profile::ProfileView),
}

impl View {
    pub fn mount(route: &Route, catalog: &Catalog, settings: &Settings, now: Instant) -> Self {
        match route {
            Route::Home => View::Home(home::HomeView::mount(catalog, settings, now)),
            Route::Search(params) => View::Search(search::SearchView::mount(params)),
            Route::Profile(id) => View::Profile(profile::ProfileView::mount(id)),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            View::Home(_) => PageKind::Home,
            View::Search(_) => PageKind::Search,
            View::Profile(_) => PageKind::Profile,
        }
    }

    /// How long the page may go without a repaint, if it has timers running.
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        match self {
            View::Home(home) => home.repaint_after(now),
            _ => None,
        }
    }
}
