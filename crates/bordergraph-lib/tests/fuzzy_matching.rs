mod common;

use bordergraph_lib::{Query, QueryOutcome, TraversalKind};

use common::fixture_session;

#[test]
fn fuzzy_matches_returns_similar_names() {
    let session = fixture_session();
    let atlas = session.atlas();

    let exact = atlas.fuzzy_country_matches("Germany", 3);
    assert_eq!(exact.first().map(String::as_str), Some("Germany"));

    let typo = atlas.fuzzy_country_matches("Germnay", 3);
    assert!(typo.contains(&"Germany".to_string()), "got {typo:?}");

    let lowercase = atlas.fuzzy_country_matches("poland", 3);
    assert!(lowercase.contains(&"Poland".to_string()));
}

#[test]
fn fuzzy_matches_respects_limit() {
    let session = fixture_session();
    let matches = session.atlas().fuzzy_country_matches("land", 2);
    assert!(matches.len() <= 2);
}

#[test]
fn fuzzy_matches_filters_low_similarity() {
    let session = fixture_session();
    let matches = session.atlas().fuzzy_country_matches("Qwxzv", 3);
    assert!(matches.is_empty(), "got {matches:?}");
}

#[test]
fn unknown_country_includes_suggestions() {
    let session = fixture_session();
    let err = session
        .execute(&Query::traverse("Swtizerland", TraversalKind::Bfs))
        .expect_err("typo should not resolve");

    let message = err.to_string();
    assert!(message.contains("country not found: Swtizerland"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Switzerland"));
}

#[test]
fn name_lookup_is_case_sensitive() {
    let session = fixture_session();
    assert!(session.resolve("france").is_err());
    assert_eq!(session.resolve("France").ok(), Some(0));
}

#[test]
fn search_is_case_insensitive_substring() {
    let session = fixture_session();
    let outcome = session.execute(&Query::search("LAND")).expect("search runs");

    let QueryOutcome::Countries(countries) = outcome else {
        panic!("expected countries");
    };
    let names: Vec<_> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Netherlands", "Switzerland", "Poland", "Ireland", "Iceland"]
    );
}

#[test]
fn list_returns_every_country() {
    let session = fixture_session();
    let QueryOutcome::Countries(countries) = session.execute(&Query::List).expect("list runs")
    else {
        panic!("expected countries");
    };
    assert_eq!(countries.len(), session.atlas().len());
}
