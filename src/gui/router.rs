// src/gui/router.rs
use crate::router::PageKind::{ self, * };
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::search::PAGE,
    &pages::profile::PAGE,
];

/// Pages reachable from the nav bar (the profile needs an id).
pub fn nav_pages() -> impl Iterator<Item = &'static dyn Page> {
    PAGES.iter().copied().filter(|p| p.kind() != Profile)
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Home    => &pages::home::PAGE,
        Search  => &pages::search::PAGE,
        Profile => &pages::profile::PAGE,
    }
}
