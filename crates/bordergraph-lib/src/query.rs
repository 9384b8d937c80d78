//! Command objects and the session that executes them.
//!
//! This module provides:
//! - [`Query`] - One user request (list, search, traversal, route, tree, filter)
//! - [`QueryOutcome`] - Structured result of a query, ready for rendering
//! - [`Session`] - Owns the atlas and its graph and answers queries
//!
//! # Example
//!
//! ```ignore
//! use bordergraph_lib::{Query, Session};
//!
//! let session = Session::load(Path::new("world_coordinates.csv"))?;
//! let outcome = session.execute(&Query::shortest_path("France", "Poland"))?;
//! ```

use std::path::Path;

use tracing::debug;

use crate::atlas::{load_atlas, Atlas, Country, CountryId};
use crate::error::{Error, Result};
use crate::filter::{CountryFilter, FilterOutcome};
use crate::graph::{build_graph, Graph};
use crate::output::{RouteSummary, SpanningTreeSummary, TraversalSummary};
use crate::path::{minimum_spanning_tree, shortest_path, traverse, PathSearch, TraversalKind};

/// Number of "did you mean" suggestions attached to unknown names.
const SUGGESTION_LIMIT: usize = 3;

/// A single request against the loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Every country in id order.
    List,
    /// Countries whose name contains `needle`, ignoring case.
    Search { needle: String },
    /// Traversal order from a named country.
    Traverse { from: String, kind: TraversalKind },
    /// Shortest route between two named countries.
    ShortestPath { from: String, to: String },
    /// Spanning tree rooted at a named country.
    SpanningTree { from: String },
    /// Countries passing the filter, ranked by population and by area.
    Filter(CountryFilter),
}

impl Query {
    pub fn search(needle: impl Into<String>) -> Self {
        Self::Search {
            needle: needle.into(),
        }
    }

    pub fn traverse(from: impl Into<String>, kind: TraversalKind) -> Self {
        Self::Traverse {
            from: from.into(),
            kind,
        }
    }

    pub fn shortest_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::ShortestPath {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn spanning_tree(from: impl Into<String>) -> Self {
        Self::SpanningTree { from: from.into() }
    }
}

/// Result of executing a [`Query`].
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    Countries(Vec<Country>),
    Traversal(TraversalSummary),
    Route(RouteSummary),
    SpanningTree(SpanningTreeSummary),
    Ranking(FilterOutcome),
}

/// Loaded dataset plus its border graph, built once and read by every query.
#[derive(Debug, Clone, Default)]
pub struct Session {
    atlas: Atlas,
    graph: Graph,
}

impl Session {
    /// Build the border graph for `atlas`.
    pub fn new(atlas: Atlas) -> Self {
        let graph = build_graph(&atlas);
        Self { atlas, graph }
    }

    /// Load a CSV dataset and build its graph.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(load_atlas(path)?))
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Resolve a country name to its id, suggesting close names when absent.
    pub fn resolve(&self, name: &str) -> Result<CountryId> {
        self.atlas
            .country_id_by_name(name)
            .ok_or_else(|| Error::UnknownCountry {
                name: name.to_string(),
                suggestions: self.atlas.fuzzy_country_matches(name, SUGGESTION_LIMIT),
            })
    }

    /// Execute one query.
    pub fn execute(&self, query: &Query) -> Result<QueryOutcome> {
        debug!(?query, "executing query");
        match query {
            Query::List => Ok(QueryOutcome::Countries(self.atlas.countries().to_vec())),
            Query::Search { needle } => Ok(QueryOutcome::Countries(
                self.atlas.search(needle).into_iter().cloned().collect(),
            )),
            Query::Traverse { from, kind } => {
                self.traversal(from, *kind).map(QueryOutcome::Traversal)
            }
            Query::ShortestPath { from, to } => self.route(from, to).map(QueryOutcome::Route),
            Query::SpanningTree { from } => {
                self.spanning_tree(from).map(QueryOutcome::SpanningTree)
            }
            Query::Filter(filter) => Ok(QueryOutcome::Ranking(self.filter(filter))),
        }
    }

    /// Traversal order from `from`.
    pub fn traversal(&self, from: &str, kind: TraversalKind) -> Result<TraversalSummary> {
        let start = self.resolve(from)?;
        let order = traverse(&self.graph, start, kind);
        Ok(TraversalSummary::new(&self.atlas, kind, start, &order))
    }

    /// Shortest route between two named countries.
    pub fn route(&self, from: &str, to: &str) -> Result<RouteSummary> {
        let start = self.resolve(from)?;
        let goal = self.resolve(to)?;

        match shortest_path(&self.graph, start, goal) {
            PathSearch::Found(route) => {
                Ok(RouteSummary::from_route(&self.atlas, &self.graph, &route))
            }
            PathSearch::Unreachable { walked } => Err(Error::Unreachable {
                start: from.to_string(),
                goal: to.to_string(),
                walked,
            }),
            PathSearch::NotFound => Err(Error::UnknownCountry {
                name: format!("{from} or {to}"),
                suggestions: Vec::new(),
            }),
        }
    }

    /// Minimum spanning tree rooted at `from`.
    pub fn spanning_tree(&self, from: &str) -> Result<SpanningTreeSummary> {
        let root = self.resolve(from)?;
        let tree = minimum_spanning_tree(&self.graph, root);
        Ok(SpanningTreeSummary::from_tree(&self.atlas, &tree))
    }

    /// Filter and rank every country.
    pub fn filter(&self, filter: &CountryFilter) -> FilterOutcome {
        filter.apply(self.atlas.countries())
    }
}
