// src/router.rs
//
// Locations and the navigation history.
//
//   /                  -> Home
//   /search?q=..       -> Search
//   /player/<id>       -> Profile
//   anything else      -> Home (redirect)

use crate::sync::QueryParams;

const SEARCH_PATH: &str = "/search";
const PLAYER_PREFIX: &str = "/player/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Search,
    Profile,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Search(QueryParams),
    /// Raw id segment; resolved against the catalog by the profile page
    Profile(String),
}

impl Route {
    pub fn parse(location: &str) -> Route {
        let location = location.trim();
        let location = location.split('#').next().unwrap_or_default();
        let (path, query) = match location.split_once('?') {
            Some((p, q)) => (p, q),
            None => (location, ""),
        };
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        // paths match case-insensitively; the id segment keeps its case
        let folded = path.to_ascii_lowercase();

        if folded == SEARCH_PATH {
            return Route::Search(QueryParams::parse(query));
        }
        if folded.starts_with(PLAYER_PREFIX) {
            let seg = &path[PLAYER_PREFIX.len()..];
            if !seg.is_empty() && !seg.contains('/') {
                return Route::Profile(s!(seg));
            }
        }
        if path != "/" {
            logd!("Router: unknown path {:?}, redirecting home", path);
        }
        Route::Home
    }

    pub fn to_location(&self) -> String {
        match self {
            Route::Home => s!("/"),
            Route::Search(params) if params.is_empty() => s!(SEARCH_PATH),
            Route::Search(params) => s!("{}?{}", SEARCH_PATH, params.to_query_string()),
            Route::Profile(id) => s!("{}{}", PLAYER_PREFIX, id),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Route::Home => PageKind::Home,
            Route::Search(_) => PageKind::Search,
            Route::Profile(_) => PageKind::Profile,
        }
    }

    pub fn profile(id: u32) -> Route {
        Route::Profile(id.to_string())
    }

    /// Landing page search submit: `/search?q=<trimmed>`, or bare `/search`.
    pub fn search_for(input: &str) -> Route {
        let q = input.trim();
        if q.is_empty() {
            Route::Search(QueryParams::new())
        } else {
            Route::Search([("q", q)].into_iter().collect())
        }
    }

    /// Quick-filter shortcut ("Bowlers" -> role=Bowler). Drops one trailing
    /// `s` and nothing else; the search page normalizes the role again.
    pub fn role_shortcut(label: &str) -> Route {
        let role = label.strip_suffix('s').unwrap_or(label);
        Route::Search([("role", role)].into_iter().collect())
    }
}

/// Linear navigation history with a cursor, browser style.
#[derive(Clone, Debug)]
pub struct History {
    entries: Vec<Route>,
    cursor: usize,
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self { entries: vec![initial], cursor: 0 }
    }

    pub fn current(&self) -> &Route {
        &self.entries[self.cursor]
    }

    pub fn location(&self) -> String {
        self.current().to_location()
    }

    /// New entry after the current one; forward entries are dropped.
    pub fn push(&mut self, route: Route) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(route);
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the current entry in place.
    pub fn replace(&mut self, route: Route) {
        self.entries[self.cursor] = route;
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Number of entries, forward ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
