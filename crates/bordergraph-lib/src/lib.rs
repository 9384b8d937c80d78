//! Bordergraph library entry points.
//!
//! This crate loads a country dataset into memory, builds a graph whose edges
//! join bordering countries weighted by great-circle distance, and answers
//! queries over it: traversal, shortest path, spanning tree, search and
//! filtered ranking. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod atlas;
pub mod borders;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod filter;
pub mod graph;
pub mod output;
pub mod path;
pub mod query;
pub mod rank;

pub use atlas::{load_atlas, load_atlas_with, Atlas, Country, CountryId, LoadOptions};
pub use borders::parse_border_list;
pub use dataset::{default_dataset_path, resolve_dataset_path};
pub use distance::haversine_km;
pub use error::{Error, Result};
pub use filter::{Bounds, CountryFilter, FilterOutcome};
pub use graph::{build_graph, Edge, Graph, Weight, NO_EDGE};
pub use output::{
    CountryRef, RouteStep, RouteSummary, SpanningTreeSummary, TraversalSummary, TreeEdge,
};
pub use path::{
    bfs, dfs, minimum_spanning_tree, shortest_path, traverse, PathSearch, Route, SpanningTree,
    TraversalKind,
};
pub use query::{Query, QueryOutcome, Session};
pub use rank::{DrainOrder, RankKey, RankedQueue};
