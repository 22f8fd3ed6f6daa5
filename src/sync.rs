// src/sync.rs
//
// Filter state <-> query string.
//
// decode/encode are the two halves of the binding. UrlSync owns the live
// FilterState of the search page: every edit marks it dirty, and one flush
// per frame writes the latest state over the current history entry. The
// history never grows while the user types or flips selectors.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::config::consts::{KEY_COUNTRY, KEY_QUERY, KEY_ROLE};
use crate::filter::{normalize_role, FilterState};
use crate::router::{History, Route};

/// Facet keys in the order they are written out.
pub const FACET_KEYS: [&str; 3] = [KEY_QUERY, KEY_COUNTRY, KEY_ROLE];

/// Query-string parameters. Unordered; a repeated key keeps its first value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `a=1&b=2` (a leading `?` is accepted). Never fails: pieces that
    /// do not decode are dropped by the form decoder.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut map = BTreeMap::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Facet keys first (q, country, role), anything else after, by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let facets = FACET_KEYS
            .iter()
            .filter_map(|k| self.0.get_key_value(*k));
        let rest = self
            .0
            .iter()
            .filter(|(k, _)| !FACET_KEYS.contains(&k.as_str()));
        facets.chain(rest).map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `q=virat+kohli&role=Batsman`, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(s!());
        for (k, v) in self.iter() {
            ser.append_pair(k, v);
        }
        ser.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            let k = k.into();
            if !params.contains_key(&k) {
                params.insert(k, v);
            }
        }
        params
    }
}

/// External representation -> FilterState. Unknown keys are ignored; the
/// role goes through `normalize_role`.
pub fn decode(params: &QueryParams) -> FilterState {
    FilterState {
        query: s!(params.get(KEY_QUERY).unwrap_or_default()),
        country: s!(params.get(KEY_COUNTRY).unwrap_or_default()),
        role: normalize_role(params.get(KEY_ROLE).unwrap_or_default()),
    }
}

/// FilterState -> external representation, non-empty facets only.
pub fn encode(state: &FilterState) -> QueryParams {
    let mut params = QueryParams::new();
    for (key, value) in [
        (KEY_QUERY, &state.query),
        (KEY_COUNTRY, &state.country),
        (KEY_ROLE, &state.role),
    ] {
        if !value.is_empty() {
            params.insert(key, value.as_str());
        }
    }
    params
}

/// Live binding between the search page's FilterState and the history.
#[derive(Clone, Debug)]
pub struct UrlSync {
    state: FilterState,
    dirty: bool,
}

impl UrlSync {
    /// Seed from the location the search page was entered with. Starts dirty
    /// so the first flush rewrites the entry in canonical form.
    pub fn from_params(params: &QueryParams) -> Self {
        let state = decode(params);
        logd!("Sync: decoded {:?}", state);
        Self { state, dirty: true }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply an edit; marks dirty only if something actually changed.
    pub fn update(&mut self, edit: impl FnOnce(&mut FilterState)) {
        let before = self.state.clone();
        edit(&mut self.state);
        if self.state != before {
            self.dirty = true;
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.update(|s| s.query = query);
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        let country = country.into();
        self.update(|s| s.country = country);
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        let role = role.into();
        self.update(|s| s.role = role);
    }

    pub fn clear(&mut self) {
        self.update(|s| *s = FilterState::default());
    }

    pub fn params(&self) -> QueryParams {
        encode(&self.state)
    }

    /// Write the current state over the current history entry if anything
    /// changed since the last flush. Returns whether a write happened.
    pub fn flush(&mut self, history: &mut History) -> bool {
        if !self.dirty {
            return false;
        }
        history.replace(Route::Search(self.params()));
        self.dirty = false;
        logd!("Sync: replaced location with {}", history.location());
        true
    }
}
