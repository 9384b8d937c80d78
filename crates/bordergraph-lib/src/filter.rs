use serde::Serialize;

use crate::atlas::Country;
use crate::rank::{RankKey, RankedQueue};

/// Optional inclusive floor and ceiling on a numeric attribute. A missing
/// bound imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub floor: Option<u64>,
    pub ceiling: Option<u64>,
}

impl Bounds {
    pub fn new(floor: Option<u64>, ceiling: Option<u64>) -> Self {
        Self { floor, ceiling }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.floor.map_or(true, |floor| value >= floor)
            && self.ceiling.map_or(true, |ceiling| value <= ceiling)
    }
}

/// Population and area constraints applied before ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountryFilter {
    pub population: Bounds,
    pub area: Bounds,
}

impl CountryFilter {
    /// Whether a country satisfies every enabled bound.
    pub fn matches(&self, country: &Country) -> bool {
        self.population.contains(country.population) && self.area.contains(country.area)
    }

    /// Rank the matching countries twice: once by population, once by area.
    pub fn apply<'a>(&self, countries: impl IntoIterator<Item = &'a Country>) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        let matching = countries.into_iter().filter(|c| self.matches(c));
        for country in matching {
            outcome.by_population.enqueue(country.clone());
            outcome.by_area.enqueue(country.clone());
        }
        outcome
    }
}

/// The same filtered set held in two independent rankings.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub by_population: RankedQueue,
    pub by_area: RankedQueue,
}

impl FilterOutcome {
    /// The queue ranked by `key`.
    pub fn ranking_mut(&mut self, key: RankKey) -> &mut RankedQueue {
        match key {
            RankKey::Population => &mut self.by_population,
            RankKey::Area => &mut self.by_area,
        }
    }
}

impl Default for FilterOutcome {
    fn default() -> Self {
        Self {
            by_population: RankedQueue::new(RankKey::Population),
            by_area: RankedQueue::new(RankKey::Area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_bounds_accept_everything() {
        let bounds = Bounds::default();
        assert!(bounds.contains(0));
        assert!(bounds.contains(u64::MAX));
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds::new(Some(10), Some(20));
        assert!(bounds.contains(10));
        assert!(bounds.contains(20));
        assert!(!bounds.contains(9));
        assert!(!bounds.contains(21));
    }

    #[test]
    fn every_enabled_bound_must_hold() {
        let filter = CountryFilter {
            population: Bounds::new(Some(100), None),
            area: Bounds::new(None, Some(50)),
        };
        let small_dense = Country::new(0, "", "a", 0.0, 0.0, 500, 40, "");
        let large = Country::new(1, "", "b", 0.0, 0.0, 500, 60, "");
        let sparse = Country::new(2, "", "c", 0.0, 0.0, 5, 40, "");

        assert!(filter.matches(&small_dense));
        assert!(!filter.matches(&large));
        assert!(!filter.matches(&sparse));
    }
}
