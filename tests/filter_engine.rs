// tests/filter_engine.rs
//
// Filter engine + role normalizer, on hand-built records and on the
// built-in catalog.
//
use cricdex::catalog::{Catalog, CareerStats, Cricketer, Role};
use cricdex::filter::{filter, filter_indices, normalize_role, FilterState, ResultView};
use proptest::prelude::*;

fn player(id: u32, name: &str, country: &str, role: Role) -> Cricketer {
    Cricketer {
        id,
        name: name.into(),
        country: country.into(),
        flag: String::new(),
        role,
        image: String::new(),
        stats: CareerStats {
            matches: 1,
            runs: 0,
            wickets: 0,
            centuries: 0,
            half_centuries: 0,
            average: 0.0,
            strike_rate: 0.0,
            highest_score: "0".into(),
            debut: 2000,
        },
        bio: String::new(),
        highlights: Vec::new(),
        recent_matches: Vec::new(),
    }
}

fn abc() -> Vec<Cricketer> {
    vec![
        player(1, "A", "X", Role::Bowler),
        player(2, "B", "Y", Role::Batsman),
        player(3, "C", "X", Role::Batsman),
    ]
}

fn ids(found: &[&Cricketer]) -> Vec<u32> {
    found.iter().map(|c| c.id).collect()
}

#[test]
fn three_record_scenario() {
    let records = abc();

    let by_country = FilterState::default().with_country("X");
    assert_eq!(ids(&filter(&records, &by_country)), vec![1, 3]);

    // "bat" hits the role text of B and C
    let by_text = FilterState::default().with_query("bat");
    assert_eq!(ids(&filter(&records, &by_text)), vec![2, 3]);

    let by_role = FilterState::default().with_role("Bowler");
    assert_eq!(ids(&filter(&records, &by_role)), vec![1]);
}

#[test]
fn all_empty_returns_everything_in_order() {
    let catalog = Catalog::builtin().unwrap();
    let all = filter(catalog.records(), &FilterState::default());
    let expected: Vec<u32> = catalog.records().iter().map(|c| c.id).collect();
    assert_eq!(ids(&all), expected);
}

#[test]
fn text_query_is_case_insensitive() {
    let catalog = Catalog::builtin().unwrap();
    let upper = filter(catalog.records(), &FilterState::default().with_query("KOHLI"));
    assert_eq!(ids(&upper), vec![1]);

    let country = filter(catalog.records(), &FilterState::default().with_query("zeal"));
    assert_eq!(ids(&country), vec![11]);

    let role = filter(catalog.records(), &FilterState::default().with_query("bat"));
    assert_eq!(ids(&role), vec![1, 2, 6, 9, 11, 12]);
}

#[test]
fn country_and_role_are_exact_and_case_sensitive() {
    let catalog = Catalog::builtin().unwrap();
    let records = catalog.records();

    assert!(filter(records, &FilterState::default().with_country("india")).is_empty());
    assert!(filter(records, &FilterState::default().with_country("Ind")).is_empty());
    assert!(filter(records, &FilterState::default().with_role("bowler")).is_empty());

    let india_bowlers = FilterState::default().with_country("India").with_role("Bowler");
    assert_eq!(ids(&filter(records, &india_bowlers)), vec![3]);
}

#[test]
fn non_canonical_role_matches_nothing() {
    let catalog = Catalog::builtin().unwrap();
    let state = FilterState::default().with_role(normalize_role("Bowlers"));
    assert!(filter(catalog.records(), &state).is_empty());
}

#[test]
fn empty_result_is_a_normal_outcome() {
    let catalog = Catalog::builtin().unwrap();
    let state = FilterState::default().with_query("zzz");
    let view = ResultView::new(&catalog, &state);
    assert!(view.is_empty());
    assert_eq!(view.total(), catalog.len());
    assert!(view.get(0).is_none());
}

#[test]
fn result_view_none_some_all() {
    let catalog = Catalog::builtin().unwrap();

    // None
    let none = ResultView::new(&catalog, &FilterState::default().with_country("Atlantis"));
    assert_eq!(none.len(), 0);

    // All
    let all = ResultView::new(&catalog, &FilterState::default());
    assert_eq!(all.len(), catalog.len());

    // Partial: England, positions 5,6,7 in the catalog
    let england = ResultView::new(&catalog, &FilterState::default().with_country("England"));
    assert_eq!(england.row_ix, vec![5, 6, 7]);
    assert_eq!(england.get(0).map(|c| c.name.as_str()), Some("Joe Root"));
    let names: Vec<&str> = england.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Joe Root", "Ben Stokes", "James Anderson"]);
}

#[test]
fn normalize_role_keeps_the_narrow_rule() {
    assert_eq!(normalize_role(""), "");
    assert_eq!(normalize_role("Batsman"), "Batsman");
    assert_eq!(normalize_role("Bowler"), "Bowler");
    // ends in "ers": left alone
    assert_eq!(normalize_role("Bowlers"), "Bowlers");
    assert_eq!(normalize_role("All-rounders"), "All-rounders");
    assert_eq!(normalize_role("Wicket-keepers"), "Wicket-keepers");
    // irregular plural: left alone
    assert_eq!(normalize_role("Batsmen"), "Batsmen");
    // simple plural: stripped once
    assert_eq!(normalize_role("Batsmans"), "Batsman");
    assert_eq!(normalize_role("ss"), "s");
    assert_eq!(normalize_role("s"), "");
}

fn facet_value(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(options).prop_map(String::from)
}

fn any_state() -> impl Strategy<Value = FilterState> {
    (
        prop_oneof![Just(String::new()), "[a-zA-Z -]{1,4}"],
        facet_value(&["", "India", "England", "Australia", "Nowhere"]),
        facet_value(&["", "Batsman", "Bowler", "All-rounder", "Wicket-keeper", "Bowlers"]),
    )
        .prop_map(|(query, country, role)| FilterState { query, country, role })
}

proptest! {
    #[test]
    fn query_results_are_exactly_the_substring_matches(query in "[a-zA-Z -]{1,4}") {
        let catalog = Catalog::builtin().unwrap();
        let state = FilterState::default().with_query(query.clone());
        let kept = filter_indices(catalog.records(), &state);
        let q = query.to_lowercase();

        for (ix, c) in catalog.records().iter().enumerate() {
            let hit = c.name.to_lowercase().contains(&q)
                || c.country.to_lowercase().contains(&q)
                || c.role.as_str().to_lowercase().contains(&q);
            prop_assert_eq!(kept.contains(&ix), hit);
        }
    }

    #[test]
    fn results_keep_catalog_order(state in any_state()) {
        let catalog = Catalog::builtin().unwrap();
        let kept = filter_indices(catalog.records(), &state);
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn tightening_a_facet_never_grows_the_result(
        base in any_state(),
        query in "[a-zA-Z]{1,3}",
        country in facet_value(&["India", "England", "Nowhere"]),
        role in facet_value(&["Batsman", "Bowler", "All-rounder"]),
    ) {
        let catalog = Catalog::builtin().unwrap();
        let records = catalog.records();
        let before = filter_indices(records, &base);

        let mut tighter = Vec::new();
        if base.query.is_empty() { tighter.push(base.clone().with_query(query)); }
        if base.country.is_empty() { tighter.push(base.clone().with_country(country)); }
        if base.role.is_empty() { tighter.push(base.clone().with_role(role)); }

        for t in tighter {
            let after = filter_indices(records, &t);
            prop_assert!(after.iter().all(|ix| before.contains(ix)));
        }
    }
}
