// src/catalog.rs
//
// The catalog: every cricketer the app knows about, loaded once at startup
// and never mutated afterwards. Shared read-only (behind an `Arc`) by the
// filter engine, the carousel and the profile page.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::options::Settings;
use crate::error::CatalogError;

static BUILTIN_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/cricketers.json"));

/// Closed set of playing roles. The string form is the canonical role tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    #[serde(rename = "Wicket-keeper")]
    WicketKeeper,
}

impl Role {
    /// Canonical display order.
    pub const ALL: [Role; 4] = [Role::Batsman, Role::Bowler, Role::AllRounder, Role::WicketKeeper];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-rounder",
            Role::WicketKeeper => "Wicket-keeper",
        }
    }

    /// Exact tag match, no normalization.
    pub fn from_tag(tag: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == tag)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CareerStats {
    pub matches: u32,
    pub runs: u32,
    pub wickets: u32,
    pub centuries: u32,
    pub half_centuries: u32,
    pub average: f64,
    pub strike_rate: f64,
    /// Display form, may carry a not-out marker ("254*")
    pub highest_score: String,
    pub debut: u16,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecentMatch {
    pub label: String,
    pub format: String,
    pub score: String,
    pub result: String,
    pub year: u16,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Cricketer {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub flag: String,
    pub role: Role,
    pub image: String,
    pub stats: CareerStats,
    pub bio: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub recent_matches: Vec<RecentMatch>,
}

/// Totals shown by the landing page counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuickStats {
    pub total_players: u64,
    pub countries: u64,
    pub total_centuries: u64,
    pub total_wickets: u64,
}

/// Read-only store of cricketers plus the derived lookup lists.
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Vec<Cricketer>,
    countries: Vec<String>,
}

impl Catalog {
    /// Build from records, keeping their order. Ids must be unique.
    pub fn new(records: Vec<Cricketer>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId(r.id));
            }
        }

        let mut countries: Vec<String> = records.iter().map(|r| r.country.clone()).collect();
        countries.sort();
        countries.dedup();

        Ok(Self { records, countries })
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let records: Vec<Cricketer> = serde_json::from_str(text)?;
        Self::new(records)
    }

    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// The dataset compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Catalog named by the settings, or the built-in one.
    pub fn load(settings: &Settings) -> Result<Self, CatalogError> {
        let catalog = match &settings.catalog_path {
            Some(path) => Self::load_file(path)?,
            None => Self::builtin()?,
        };
        logf!(
            "Catalog: loaded {} cricketers from {} countries",
            catalog.len(),
            catalog.countries.len()
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[Cricketer] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct countries, sorted.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn roles(&self) -> &'static [Role] {
        &Role::ALL
    }

    pub fn get(&self, id: u32) -> Option<&Cricketer> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Resolve a raw id as it appears in a profile location.
    pub fn lookup(&self, raw_id: &str) -> Result<&Cricketer, CatalogError> {
        parse_id(raw_id)
            .and_then(|id| self.get(id))
            .ok_or_else(|| CatalogError::NotFound(s!(raw_id)))
    }

    /// The carousel rotation: the first `n` records.
    pub fn featured(&self, n: usize) -> &[Cricketer] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn quick_stats(&self) -> QuickStats {
        QuickStats {
            total_players: self.records.len() as u64,
            countries: self.countries.len() as u64,
            total_centuries: self.records.iter().map(|r| u64::from(r.stats.centuries)).sum(),
            total_wickets: self.records.iter().map(|r| u64::from(r.stats.wickets)).sum(),
        }
    }
}

/// Numeric reading of a location id segment. Surrounding whitespace is
/// ignored; decimal forms with no fraction ("3.0", "3e0") and `0x`/`0o`/`0b`
/// prefixes resolve to the same id. Blank segments never do.
pub fn parse_id(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = raw.strip_prefix(prefix) {
            return u32::from_str_radix(digits, radix).ok();
        }
    }
    if let Ok(id) = raw.parse::<u32>() {
        return Some(id);
    }
    let n = raw.parse::<f64>().ok()?;
    let in_range = n.is_finite() && n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n);
    in_range.then_some(n as u32)
}
