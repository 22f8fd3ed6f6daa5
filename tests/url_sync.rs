// tests/url_sync.rs
//
// decode/encode and the live binding to history.
//
use cricdex::filter::FilterState;
use cricdex::router::{History, Route};
use cricdex::sync::{decode, encode, QueryParams, UrlSync};
use proptest::prelude::*;

fn params(query: &str) -> QueryParams {
    QueryParams::parse(query)
}

#[test]
fn absent_and_empty_keys_decode_to_empty_facets() {
    assert_eq!(decode(&params("")), FilterState::default());
    assert_eq!(decode(&params("q=&country=&role=")), FilterState::default());
}

#[test]
fn decode_reads_the_three_keys() {
    let state = decode(&params("?q=virat+kohli&country=India&role=Batsman"));
    assert_eq!(state.query, "virat kohli");
    assert_eq!(state.country, "India");
    assert_eq!(state.role, "Batsman");
}

#[test]
fn decode_normalizes_role_only() {
    assert_eq!(decode(&params("role=Batsmans")).role, "Batsman");
    assert_eq!(decode(&params("role=Bowlers")).role, "Bowlers");
    assert_eq!(decode(&params("role=Batsmen")).role, "Batsmen");
    // other facets are opaque
    assert_eq!(decode(&params("q=Bowlers&country=Kiwis")).query, "Bowlers");
    assert_eq!(decode(&params("country=Kiwis")).country, "Kiwis");
}

#[test]
fn unknown_and_malformed_keys_are_ignored() {
    let state = decode(&params("=&&foo=1&q=x&%zz=1&page=2"));
    assert_eq!(state, FilterState::default().with_query("x"));
}

#[test]
fn repeated_key_keeps_first_value() {
    let p = params("q=first&q=second");
    assert_eq!(p.get("q"), Some("first"));
    assert_eq!(decode(&p).query, "first");
}

#[test]
fn encode_skips_empty_facets() {
    assert!(encode(&FilterState::default()).is_empty());

    let only_country = encode(&FilterState::default().with_country("India"));
    assert_eq!(only_country.len(), 1);
    assert_eq!(only_country.get("country"), Some("India"));
    assert!(!only_country.contains_key("q"));
    assert!(!only_country.contains_key("role"));
}

#[test]
fn query_string_lists_facets_in_fixed_order() {
    let state = FilterState::default()
        .with_role("Bowler")
        .with_country("New Zealand")
        .with_query("a&b");
    assert_eq!(
        encode(&state).to_query_string(),
        "q=a%26b&country=New+Zealand&role=Bowler"
    );
}

#[test]
fn sync_starts_dirty_and_rewrites_the_entry_once() {
    let mut history = History::new(Route::Home);
    history.push(Route::parse("/search?role=Bowlers&foo=1"));
    let Route::Search(p) = history.current().clone() else { panic!("expected search") };

    let mut sync = UrlSync::from_params(&p);
    assert!(sync.is_dirty());
    assert!(sync.flush(&mut history));

    // replaced, not pushed; unknown key gone
    assert_eq!(history.len(), 2);
    assert_eq!(history.location(), "/search?role=Bowlers");

    assert!(!sync.flush(&mut history));
}

#[test]
fn edits_before_a_flush_collapse_into_one_write() {
    let mut history = History::new(Route::Search(QueryParams::new()));
    let mut sync = UrlSync::from_params(&QueryParams::new());
    sync.flush(&mut history);

    sync.set_query("v");
    sync.set_query("vi");
    sync.set_query("vir");
    sync.set_country("India");
    assert!(sync.flush(&mut history));

    assert_eq!(history.len(), 1);
    assert_eq!(history.location(), "/search?q=vir&country=India");
}

#[test]
fn unchanged_edit_does_not_mark_dirty() {
    let mut history = History::new(Route::Search(QueryParams::new()));
    let mut sync = UrlSync::from_params(&params("country=India"));
    sync.flush(&mut history);

    sync.set_country("India");
    assert!(!sync.is_dirty());
    assert!(!sync.flush(&mut history));
}

#[test]
fn clear_drops_every_key() {
    let mut history = History::new(Route::Search(QueryParams::new()));
    let mut sync = UrlSync::from_params(&params("q=a&country=India&role=Bowler"));
    sync.flush(&mut history);
    assert!(sync.state().has_filters());

    sync.clear();
    sync.flush(&mut history);
    assert!(!sync.state().has_filters());
    assert_eq!(history.location(), "/search");
}

const CANONICAL_ROLES: &[&str] = &["", "Batsman", "Bowler", "All-rounder", "Wicket-keeper"];

fn canonical_role() -> impl Strategy<Value = String> {
    prop::sample::select(CANONICAL_ROLES).prop_map(String::from)
}

proptest! {
    #[test]
    fn decode_encode_round_trip(query in "\\PC{0,12}", country in "\\PC{0,12}", role in canonical_role()) {
        let state = FilterState { query, country, role };
        prop_assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn round_trip_through_query_string(query in "\\PC{0,12}", country in "\\PC{0,12}", role in canonical_role()) {
        let state = FilterState { query, country, role };
        let text = encode(&state).to_query_string();
        prop_assert_eq!(decode(&QueryParams::parse(&text)), state);
    }
}
