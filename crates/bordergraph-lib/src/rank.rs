//! Order-maintaining queue used to rank filtered countries.
//!
//! Countries are kept in ascending order of a numeric key by insertion: a new
//! record is compared against the back of the queue only, larger records are
//! parked on a holding stack, and they are replayed once the new record is in
//! place. Reading the queue drains it.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::atlas::Country;

/// Numeric attribute a [`RankedQueue`] is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankKey {
    Population,
    Area,
}

impl RankKey {
    /// Extract the ranking value from a country.
    pub fn value(self, country: &Country) -> u64 {
        match self {
            RankKey::Population => country.population,
            RankKey::Area => country.area,
        }
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RankKey::Population => "population",
            RankKey::Area => "area",
        };
        f.write_str(value)
    }
}

/// Direction used when draining a [`RankedQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainOrder {
    #[default]
    Ascending,
    Descending,
}

/// Countries kept in ascending order of a [`RankKey`].
#[derive(Debug, Clone)]
pub struct RankedQueue {
    key: RankKey,
    items: VecDeque<Country>,
    held: Vec<Country>,
}

impl RankedQueue {
    pub fn new(key: RankKey) -> Self {
        Self {
            key,
            items: VecDeque::new(),
            held: Vec::new(),
        }
    }

    pub fn key(&self) -> RankKey {
        self.key
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a country, keeping the queue sorted by key. Equal keys keep
    /// their insertion order.
    pub fn enqueue(&mut self, country: Country) {
        let value = self.key.value(&country);
        while self
            .items
            .back()
            .is_some_and(|last| self.key.value(last) > value)
        {
            if let Some(last) = self.items.pop_back() {
                self.held.push(last);
            }
        }

        self.items.push_back(country);
        while let Some(parked) = self.held.pop() {
            self.items.push_back(parked);
        }
    }

    /// Remove and return every country in the requested order. A second
    /// drain returns nothing.
    pub fn drain(&mut self, order: DrainOrder) -> Vec<Country> {
        let items = std::mem::take(&mut self.items);
        match order {
            DrainOrder::Ascending => items.into_iter().collect(),
            DrainOrder::Descending => items.into_iter().rev().collect(),
        }
    }
}

impl Extend<Country> for RankedQueue {
    fn extend<I: IntoIterator<Item = Country>>(&mut self, iter: I) {
        for country in iter {
            self.enqueue(country);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, population: u64, area: u64) -> Country {
        Country::new(0, "", name, 0.0, 0.0, population, area, "")
    }

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn drains_ascending_and_descending() {
        let mut queue = RankedQueue::new(RankKey::Population);
        queue.extend([country("a", 10, 0), country("b", 5, 0), country("c", 20, 0)]);
        let mut again = queue.clone();

        assert_eq!(names(&queue.drain(DrainOrder::Ascending)), vec!["b", "a", "c"]);
        assert_eq!(names(&again.drain(DrainOrder::Descending)), vec!["c", "a", "b"]);
    }

    #[test]
    fn second_drain_is_empty() {
        let mut queue = RankedQueue::new(RankKey::Area);
        queue.enqueue(country("a", 0, 3));
        assert_eq!(queue.drain(DrainOrder::Ascending).len(), 1);
        assert!(queue.drain(DrainOrder::Ascending).is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut queue = RankedQueue::new(RankKey::Area);
        queue.extend([
            country("first", 0, 7),
            country("big", 0, 9),
            country("second", 0, 7),
            country("small", 0, 1),
        ]);
        assert_eq!(
            names(&queue.drain(DrainOrder::Ascending)),
            vec!["small", "first", "second", "big"]
        );
    }

    #[test]
    fn reverse_sorted_input_ends_ascending() {
        let mut queue = RankedQueue::new(RankKey::Population);
        queue.extend((0..50).rev().map(|p| country("x", p, 0)));
        let drained = queue.drain(DrainOrder::Ascending);
        assert!(drained.windows(2).all(|w| w[0].population <= w[1].population));
        assert_eq!(drained.len(), 50);
    }
}
