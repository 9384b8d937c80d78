use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::atlas::CountryId;
use crate::graph::{Edge, Graph, Weight, NO_EDGE};

/// Distance marker for nodes not (yet) reached.
const UNREACHED: u64 = u64::MAX;

/// Traversal strategies over the border graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalKind {
    /// Breadth-first (queue) order.
    Bfs,
    /// Depth-first (stack) order.
    Dfs,
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TraversalKind::Bfs => "bfs",
            TraversalKind::Dfs => "dfs",
        };
        f.write_str(value)
    }
}

/// Run the requested traversal from `start`.
pub fn traverse(graph: &Graph, start: CountryId, kind: TraversalKind) -> Vec<CountryId> {
    match kind {
        TraversalKind::Bfs => bfs(graph, start),
        TraversalKind::Dfs => dfs(graph, start),
    }
}

/// Breadth-first visitation order from `start`.
///
/// Neighbours are discovered in ascending id order. An out-of-range start
/// yields an empty order.
pub fn bfs(graph: &Graph, start: CountryId) -> Vec<CountryId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for (next, _) in graph.neighbours(current) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            queue.push_back(next);
        }
    }

    order
}

/// Depth-first visitation order from `start`.
///
/// Each node descends into its lowest-id unvisited neighbour first, matching
/// a recursive walk over the adjacency row. An out-of-range start yields an
/// empty order.
pub fn dfs(graph: &Graph, start: CountryId) -> Vec<CountryId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.node_count()];
    let mut order = vec![start];
    // (node, next column of its row still to scan)
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        let row = graph.row(node).unwrap_or(&[]);
        let next = (cursor..row.len()).find(|&target| row[target] != NO_EDGE && !visited[target]);

        match next {
            Some(next) => {
                frame.1 = next + 1;
                visited[next] = true;
                order.push(next);
                stack.push((next, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Shortest route between two countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Node ids from source to destination inclusive.
    pub steps: Vec<CountryId>,
    /// Sum of the edge weights along `steps`.
    pub distance_km: u64,
}

impl Route {
    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Outcome of a shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSearch {
    Found(Route),
    /// Both endpoints exist but the destination was never reached. `walked`
    /// counts the nodes seen while following parent links back from it.
    Unreachable { walked: usize },
    /// One of the endpoints is not a node of the graph.
    NotFound,
}

/// Dijkstra's algorithm over the dense adjacency matrix.
///
/// The next node to settle is the unvisited node with the smallest tentative
/// distance; ties go to the lowest id. The reported distance is re-summed from
/// the reconstructed path's edge weights.
pub fn shortest_path(graph: &Graph, source: CountryId, goal: CountryId) -> PathSearch {
    if !graph.contains(source) || !graph.contains(goal) {
        return PathSearch::NotFound;
    }
    if source == goal {
        return PathSearch::Found(Route {
            steps: vec![source],
            distance_km: 0,
        });
    }

    let n = graph.node_count();
    let mut distances = vec![UNREACHED; n];
    let mut parents: Vec<Option<CountryId>> = vec![None; n];
    let mut visited = vec![false; n];
    distances[source] = 0;

    while let Some(current) = closest_unvisited(&distances, &visited) {
        visited[current] = true;
        for (next, weight) in graph.neighbours(current) {
            if visited[next] {
                continue;
            }
            let candidate = distances[current] + u64::from(weight);
            if candidate < distances[next] {
                distances[next] = candidate;
                parents[next] = Some(current);
            }
        }
    }

    let steps = walk_parents(&parents, goal);
    if steps.len() < 2 {
        return PathSearch::Unreachable {
            walked: steps.len(),
        };
    }

    let distance_km = path_weight(graph, &steps);
    PathSearch::Found(Route { steps, distance_km })
}

/// Spanning tree grown from a root, with a display walk over its edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub root: CountryId,
    /// Depth-first order over the tree starting at `root`.
    pub order: Vec<CountryId>,
    /// Tree edges as `(parent, child, weight)`, in child id order.
    pub edges: Vec<Edge>,
    pub total_km: u64,
}

/// Prim's algorithm over the dense adjacency matrix.
///
/// Only nodes reachable from `root` join the tree. The tree edges are
/// installed into a fresh graph and walked depth-first from the root to give
/// the display order. An out-of-range root yields an empty tree.
pub fn minimum_spanning_tree(graph: &Graph, root: CountryId) -> SpanningTree {
    if !graph.contains(root) {
        return SpanningTree {
            root,
            order: Vec::new(),
            edges: Vec::new(),
            total_km: 0,
        };
    }

    let n = graph.node_count();
    let mut distances = vec![UNREACHED; n];
    let mut parents: Vec<Option<CountryId>> = vec![None; n];
    let mut visited = vec![false; n];
    distances[root] = 0;

    while let Some(current) = closest_unvisited(&distances, &visited) {
        visited[current] = true;
        for (next, weight) in graph.neighbours(current) {
            if !visited[next] && u64::from(weight) < distances[next] {
                distances[next] = u64::from(weight);
                parents[next] = Some(current);
            }
        }
    }

    let edges: Vec<Edge> = (0..n)
        .filter(|&child| visited[child])
        .filter_map(|child| {
            parents[child].map(|parent| Edge {
                from: parent,
                to: child,
                distance_km: distances[child] as Weight,
            })
        })
        .collect();

    let total_km = edges.iter().map(|edge| u64::from(edge.distance_km)).sum();
    let tree = Graph::from_edges(n, edges.iter().copied());

    SpanningTree {
        root,
        order: dfs(&tree, root),
        edges,
        total_km,
    }
}

/// Lowest-id unvisited node with the smallest finite distance.
fn closest_unvisited(distances: &[u64], visited: &[bool]) -> Option<CountryId> {
    let mut best: Option<CountryId> = None;
    for (node, &distance) in distances.iter().enumerate() {
        if visited[node] || distance == UNREACHED {
            continue;
        }
        if best.map_or(true, |current| distance < distances[current]) {
            best = Some(node);
        }
    }
    best
}

fn walk_parents(parents: &[Option<CountryId>], goal: CountryId) -> Vec<CountryId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        current = parents[node];
    }
    path.reverse();
    path
}

fn path_weight(graph: &Graph, steps: &[CountryId]) -> u64 {
    steps
        .windows(2)
        .filter_map(|pair| graph.weight(pair[0], pair[1]))
        .map(u64::from)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: CountryId, to: CountryId, distance_km: Weight) -> Edge {
        Edge {
            from,
            to,
            distance_km,
        }
    }

    /// 0 - 1 - 3, 0 - 2 - 3, plus an isolated node 4.
    fn diamond() -> Graph {
        Graph::from_edges(
            5,
            [edge(0, 1, 5), edge(0, 2, 5), edge(1, 3, 5), edge(2, 3, 5)],
        )
    }

    #[test]
    fn bfs_visits_by_layers() {
        assert_eq!(bfs(&diamond(), 0), vec![0, 1, 2, 3]);
        assert_eq!(bfs(&diamond(), 3), vec![3, 1, 2, 0]);
    }

    #[test]
    fn dfs_prefers_lowest_id() {
        assert_eq!(dfs(&diamond(), 0), vec![0, 1, 3, 2]);
        assert_eq!(dfs(&diamond(), 2), vec![2, 0, 1, 3]);
    }

    #[test]
    fn traversal_out_of_range_is_empty() {
        assert!(bfs(&diamond(), 5).is_empty());
        assert!(dfs(&diamond(), 42).is_empty());
    }

    #[test]
    fn isolated_node_is_a_singleton() {
        assert_eq!(bfs(&diamond(), 4), vec![4]);
        assert_eq!(dfs(&diamond(), 4), vec![4]);
    }

    #[test]
    fn equal_cost_tie_goes_to_lowest_id() {
        let PathSearch::Found(route) = shortest_path(&diamond(), 0, 3) else {
            panic!("route expected");
        };
        assert_eq!(route.steps, vec![0, 1, 3]);
        assert_eq!(route.distance_km, 10);
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn unreachable_goal_reports_walk_length() {
        assert_eq!(
            shortest_path(&diamond(), 0, 4),
            PathSearch::Unreachable { walked: 1 }
        );
    }

    #[test]
    fn missing_endpoint_is_not_found() {
        assert_eq!(shortest_path(&diamond(), 0, 9), PathSearch::NotFound);
        assert_eq!(shortest_path(&diamond(), 9, 0), PathSearch::NotFound);
    }

    #[test]
    fn prim_picks_cheapest_edges() {
        // Triangle with one expensive side.
        let graph = Graph::from_edges(3, [edge(0, 1, 1), edge(1, 2, 2), edge(0, 2, 10)]);
        let tree = minimum_spanning_tree(&graph, 0);

        assert_eq!(tree.edges, vec![edge(0, 1, 1), edge(1, 2, 2)]);
        assert_eq!(tree.total_km, 3);
        assert_eq!(tree.order, vec![0, 1, 2]);
    }

    #[test]
    fn prim_skips_unreachable_nodes() {
        let tree = minimum_spanning_tree(&diamond(), 0);
        assert_eq!(tree.edges.len(), 3);
        assert!(!tree.order.contains(&4));

        let lonely = minimum_spanning_tree(&diamond(), 4);
        assert_eq!(lonely.order, vec![4]);
        assert!(lonely.edges.is_empty());
    }

    #[test]
    fn prim_out_of_range_root_is_empty() {
        let tree = minimum_spanning_tree(&diamond(), 12);
        assert!(tree.order.is_empty());
        assert!(tree.edges.is_empty());
    }
}
