use serde::Serialize;
use tracing::{debug, info};

use crate::atlas::{Atlas, CountryId};
use crate::distance::haversine_km;

/// Edge weight in whole kilometres.
pub type Weight = u32;

/// Sentinel stored in the adjacency matrix for "no edge". Real great-circle
/// distances never exceed half the Earth's circumference, so the maximum
/// value cannot collide with a genuine weight.
pub const NO_EDGE: Weight = Weight::MAX;

/// Weighted connection between two countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: CountryId,
    pub to: CountryId,
    pub distance_km: Weight,
}

/// Dense, symmetric adjacency matrix over the countries of an atlas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    size: usize,
    cells: Vec<Weight>,
}

impl Graph {
    /// An `n`-node graph with no edges.
    pub fn with_nodes(size: usize) -> Self {
        Self {
            size,
            cells: vec![NO_EDGE; size * size],
        }
    }

    /// Build a graph of `size` nodes from an explicit edge list. Edges that
    /// reference ids outside `0..size` or connect a node to itself are ignored.
    pub fn from_edges(size: usize, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::with_nodes(size);
        for edge in edges {
            graph.set_edge(edge.from, edge.to, edge.distance_km);
        }
        graph
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.size
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Whether `id` addresses a node of this graph.
    pub fn contains(&self, id: CountryId) -> bool {
        id < self.size
    }

    /// Weight of the edge between `from` and `to`, if any.
    pub fn weight(&self, from: CountryId, to: CountryId) -> Option<Weight> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        match self.cells[from * self.size + to] {
            NO_EDGE => None,
            weight => Some(weight),
        }
    }

    /// Raw adjacency row for `id`, with [`NO_EDGE`] marking missing edges.
    pub fn row(&self, id: CountryId) -> Option<&[Weight]> {
        if !self.contains(id) {
            return None;
        }
        let start = id * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Neighbours of `id` in ascending id order together with edge weights.
    pub fn neighbours(&self, id: CountryId) -> impl Iterator<Item = (CountryId, Weight)> + '_ {
        self.row(id)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight != NO_EDGE)
            .map(|(target, weight)| (target, *weight))
    }

    /// Every undirected edge once, with `from < to`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.size).flat_map(move |from| {
            self.neighbours(from)
                .filter(move |(to, _)| from < *to)
                .map(move |(to, distance_km)| Edge {
                    from,
                    to,
                    distance_km,
                })
        })
    }

    /// Install an edge in both directions. Self-loops and out-of-range ids are
    /// rejected so the diagonal always reads as "no edge".
    fn set_edge(&mut self, from: CountryId, to: CountryId, weight: Weight) -> bool {
        if from == to || !self.contains(from) || !self.contains(to) {
            return false;
        }
        self.cells[from * self.size + to] = weight;
        self.cells[to * self.size + from] = weight;
        true
    }
}

/// Build the border graph for an atlas.
///
/// Every border name is resolved against the atlas by exact name. Resolved
/// pairs get a symmetric edge weighted by the truncated great-circle
/// distance between the two countries; unresolved names are skipped.
pub fn build_graph(atlas: &Atlas) -> Graph {
    let mut graph = Graph::with_nodes(atlas.len());
    let mut unresolved = 0usize;

    for country in atlas.countries() {
        for neighbour_name in &country.borders {
            let Some(target) = atlas.country_id_by_name(neighbour_name) else {
                debug!(country = %country.name, border = %neighbour_name, "unresolved border name");
                unresolved += 1;
                continue;
            };
            let Some(neighbour) = atlas.country(target) else {
                continue;
            };

            let distance = haversine_km(
                country.latitude,
                country.longitude,
                neighbour.latitude,
                neighbour.longitude,
            );
            if !graph.set_edge(country.id, target, distance as Weight) {
                debug!(country = %country.name, "country lists itself as a neighbour");
            }
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        unresolved,
        "built border graph"
    );
    graph
}
