// src/filter.rs
//
// Faceted filtering over the catalog.
//
// - FilterState: the three facets (free text, country, role). Empty facet
//   means "no constraint"; facets combine with AND.
// - filter / filter_indices: the pure, order-preserving filter.
// - ResultView: index projection into a Catalog for the result grid, so the
//   view never clones records.

use crate::catalog::{Catalog, Cricketer};

/// Map a role token from a shortcut link or stored location to the role tag.
///
/// Strips one trailing `s` unless the token ends in `ers`. Nothing else:
/// "Bowlers" and "All-rounders" come back unchanged and "Batsmen" is not
/// singularized, so those tokens select no canonical role.
pub fn normalize_role(token: &str) -> String {
    match token.strip_suffix('s') {
        Some(stem) if !token.ends_with("ers") => s!(stem),
        _ => s!(token),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free text, matched case-insensitively against name, country, role
    pub query: String,
    /// Exact country name, empty for all
    pub country: String,
    /// Exact role tag, empty for all
    pub role: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.country.is_empty() && self.role.is_empty()
    }

    /// Whether any facet constrains the result (drives Clear + chips).
    pub fn has_filters(&self) -> bool {
        !self.is_empty()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// All three predicates for one record.
    pub fn matches(&self, c: &Cricketer) -> bool {
        self.matches_text(c) && self.matches_country(c) && self.matches_role(c)
    }

    fn matches_text(&self, c: &Cricketer) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        c.name.to_lowercase().contains(&q)
            || c.country.to_lowercase().contains(&q)
            || c.role.as_str().to_lowercase().contains(&q)
    }

    fn matches_country(&self, c: &Cricketer) -> bool {
        self.country.is_empty() || c.country == self.country
    }

    fn matches_role(&self, c: &Cricketer) -> bool {
        self.role.is_empty() || c.role.as_str() == self.role
    }
}

/// Positions of the matching records, ascending.
pub fn filter_indices(records: &[Cricketer], state: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, c)| state.matches(c))
        .map(|(ix, _)| ix)
        .collect()
}

/// Matching records in catalog order. May be empty.
pub fn filter<'a>(records: &'a [Cricketer], state: &FilterState) -> Vec<&'a Cricketer> {
    records.iter().filter(|c| state.matches(c)).collect()
}

/// Zero-copy filtered view for display.
#[derive(Clone, Debug)]
pub struct ResultView<'a> {
    /// Positions of kept records in the catalog
    pub row_ix: Vec<usize>,
    catalog: &'a Catalog,
}

impl<'a> ResultView<'a> {
    pub fn new(catalog: &'a Catalog, state: &FilterState) -> Self {
        Self {
            row_ix: filter_indices(catalog.records(), state),
            catalog,
        }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Size of the unfiltered catalog ("Showing X of Y").
    pub fn total(&self) -> usize { self.catalog.len() }

    pub fn get(&self, i: usize) -> Option<&'a Cricketer> {
        self.row_ix.get(i).and_then(|&ix| self.catalog.records().get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Cricketer> + '_ {
        let records = self.catalog.records();
        self.row_ix.iter().filter_map(move |&ix| records.get(ix))
    }
}
