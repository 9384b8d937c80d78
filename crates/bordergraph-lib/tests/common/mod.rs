//! Common test utilities and fixture helpers.
//!
//! Provides the path to the checked-in country fixture and small in-memory
//! atlases for algorithm tests.

use std::path::PathBuf;

use bordergraph_lib::{Atlas, Country, Session};

/// Path to the checked-in country fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/countries.csv")
}

/// Session over the fixture dataset.
#[allow(dead_code)]
pub fn fixture_session() -> Session {
    Session::load(&fixture_path()).expect("fixture loads")
}

/// Atlas from `(name, latitude, longitude, borders)` tuples; ids follow order.
#[allow(dead_code)]
pub fn atlas_of(entries: &[(&str, f64, f64, &str)]) -> Atlas {
    let countries = entries
        .iter()
        .enumerate()
        .map(|(id, (name, lat, lon, borders))| {
            Country::new(id, &name[..2.min(name.len())], *name, *lat, *lon, 0, 0, borders)
        })
        .collect();
    Atlas::from_countries(countries)
}
