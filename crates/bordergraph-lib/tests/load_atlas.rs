mod common;

use std::fs;

use bordergraph_lib::{load_atlas, load_atlas_with, Error, LoadOptions, Session};
use tempfile::TempDir;

use common::fixture_path;

#[test]
fn loads_fixture_in_file_order() {
    let atlas = load_atlas(&fixture_path()).expect("fixture loads");

    assert_eq!(atlas.len(), 17);
    assert_eq!(atlas.country_name(0), Some("France"));
    assert_eq!(atlas.country_id_by_name("Iceland"), Some(16));

    let belgium = atlas.country(atlas.country_id_by_name("Belgium").unwrap()).unwrap();
    assert_eq!(belgium.code, "BE");
    assert_eq!(belgium.population, 11_555_997);
    assert_eq!(belgium.area, 30_528);
    assert_eq!(
        belgium.borders,
        vec!["France", "Netherlands", "Germany", "Luxembourg"]
    );
}

#[test]
fn ids_match_positions() {
    let atlas = load_atlas(&fixture_path()).expect("fixture loads");
    for (index, country) in atlas.countries().iter().enumerate() {
        assert_eq!(country.id, index);
    }
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nope.csv");

    let err = load_atlas(&path).expect_err("missing dataset");
    assert!(matches!(err, Error::DatasetNotFound { .. }));
    assert!(Session::load(&path).is_err());
}

#[test]
fn malformed_rows_are_recovered() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("broken.csv");
    fs::write(
        &path,
        "code,name,latitude,longitude,population,area,borders\n\
         AA,Alpha,abc,1.0,n/a,12,Beta\n\
         BB,Beta,0.0,2.0,7\n",
    )
    .expect("write dataset");

    let session = Session::load(&path).expect("malformed fields default");
    let atlas = session.atlas();
    let alpha = atlas.country(0).unwrap();
    let beta = atlas.country(1).unwrap();

    assert_eq!(alpha.latitude, 0.0);
    assert_eq!(alpha.population, 0);
    assert_eq!(alpha.area, 12);
    assert_eq!(beta.population, 7);
    assert_eq!(beta.area, 0);
    assert!(beta.borders.is_empty());
    assert!(session.graph().weight(0, 1).is_some());
}

#[test]
fn row_limit_is_honoured() {
    let options = LoadOptions { max_rows: Some(3) };
    let atlas = load_atlas_with(&fixture_path(), &options).expect("fixture loads");

    assert_eq!(atlas.len(), 3);
    assert_eq!(atlas.country_name(2), Some("Portugal"));
}
