//! Display-ready result structures handed to presentation layers.

use serde::Serialize;

use crate::atlas::{Atlas, CountryId};
use crate::graph::{Graph, Weight};
use crate::path::{Route, SpanningTree, TraversalKind};

const UNKNOWN: &str = "<unknown>";

/// A country referenced by id and resolved name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountryRef {
    pub id: CountryId,
    pub name: String,
}

impl CountryRef {
    pub fn resolve(atlas: &Atlas, id: CountryId) -> Self {
        Self {
            id,
            name: atlas.country_name(id).unwrap_or(UNKNOWN).to_string(),
        }
    }
}

/// Visitation order of a traversal.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TraversalSummary {
    pub kind: TraversalKind,
    pub start: CountryRef,
    pub countries: Vec<CountryRef>,
}

impl TraversalSummary {
    pub fn new(atlas: &Atlas, kind: TraversalKind, start: CountryId, order: &[CountryId]) -> Self {
        Self {
            kind,
            start: CountryRef::resolve(atlas, start),
            countries: resolve_all(atlas, order),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.countries.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Step taken along a shortest route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: CountryId,
    pub name: String,
    /// Distance of the edge leading into this step; `None` for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_km: Option<Weight>,
}

/// Shortest route with resolved names and per-leg distances.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: CountryRef,
    pub goal: CountryRef,
    pub hops: usize,
    pub distance_km: u64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    pub fn from_route(atlas: &Atlas, graph: &Graph, route: &Route) -> Self {
        let steps: Vec<RouteStep> = route
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| RouteStep {
                index,
                id,
                name: CountryRef::resolve(atlas, id).name,
                leg_km: index
                    .checked_sub(1)
                    .and_then(|previous| graph.weight(route.steps[previous], id)),
            })
            .collect();

        let first = route.steps.first().copied().unwrap_or_default();
        let last = route.steps.last().copied().unwrap_or_default();

        Self {
            start: CountryRef::resolve(atlas, first),
            goal: CountryRef::resolve(atlas, last),
            hops: route.hop_count(),
            distance_km: route.distance_km,
            steps,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Spanning tree edge with resolved endpoint names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TreeEdge {
    pub parent: CountryRef,
    pub child: CountryRef,
    pub distance_km: Weight,
}

/// Spanning tree rooted at one country.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpanningTreeSummary {
    pub root: CountryRef,
    /// Depth-first walk over the tree.
    pub countries: Vec<CountryRef>,
    pub edges: Vec<TreeEdge>,
    pub total_km: u64,
}

impl SpanningTreeSummary {
    pub fn from_tree(atlas: &Atlas, tree: &SpanningTree) -> Self {
        Self {
            root: CountryRef::resolve(atlas, tree.root),
            countries: resolve_all(atlas, &tree.order),
            edges: tree
                .edges
                .iter()
                .map(|edge| TreeEdge {
                    parent: CountryRef::resolve(atlas, edge.from),
                    child: CountryRef::resolve(atlas, edge.to),
                    distance_km: edge.distance_km,
                })
                .collect(),
            total_km: tree.total_km,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.countries.iter().map(|c| c.name.as_str()).collect()
    }
}

fn resolve_all(atlas: &Atlas, ids: &[CountryId]) -> Vec<CountryRef> {
    ids.iter()
        .map(|&id| CountryRef::resolve(atlas, id))
        .collect()
}
