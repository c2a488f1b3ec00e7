//! Linking buckets into a connected, acyclic neighbor structure.
//!
//! Walking the elimination ordering links each bucket to the bucket of its minimum-rank
//! remaining vertex. This yields a forest; disconnected pieces are then joined by an overlap
//! heuristic until one tree spans every vertex.
use crate::bucket::Buckets;
use crate::cancel::{self, CancellationToken};
use crate::error::Result;
use crate::hypergraph::Vertex;
use crate::ordering::EliminationOrdering;
use crate::sorted;

use tracing::{debug, trace};

/// Undirected adjacency lists over vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborGraph {
    adjacency: Vec<Vec<Vertex>>,
    edge_count: usize,
}

impl NeighborGraph {
    /// A graph on `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        NeighborGraph {
            adjacency: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Record the undirected edge `a - b`.
    pub fn add_edge(&mut self, a: Vertex, b: Vertex) {
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        self.edge_count += 1;
    }

    /// Neighbors of `v`, in insertion order.
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.adjacency[v.index()]
    }

    /// All vertices reachable from `start` (including `start`), sorted ascending.
    pub fn reachable(&self, start: Vertex) -> Vec<Vertex> {
        let mut visited = vec![false; self.adjacency.len()];
        visited[start.index()] = true;

        let mut output = vec![start];
        let mut frontier = vec![start];
        let mut next = Vec::new();

        while !frontier.is_empty() {
            for &vertex in &frontier {
                for &neighbor in self.neighbors(vertex) {
                    if !std::mem::replace(&mut visited[neighbor.index()], true) {
                        output.push(neighbor);
                        next.push(neighbor);
                    }
                }
            }
            frontier.clear();
            std::mem::swap(&mut frontier, &mut next);
        }

        output.sort_unstable();
        output
    }
}

/// Result of connecting buckets: the neighbor tree and the vertex it should be rooted at.
#[derive(Debug, Clone)]
pub struct Connection {
    pub root: Vertex,
    pub neighbors: NeighborGraph,
    /// Number of edges added by the reconnection heuristic.
    pub reconnections: usize,
}

/// Link buckets along the elimination ordering, then reconnect the resulting forest.
///
/// Buckets are updated in place: each bucket's leftover vertices are merged into the bucket
/// of its minimum-rank leftover vertex. The returned neighbor graph is a tree with exactly
/// `n - 1` edges. With no buckets the graph is empty and `root` names no vertex; callers
/// handle that case before materializing.
pub(crate) fn connect(
    buckets: &mut Buckets,
    ordering: &EliminationOrdering,
    cancellation: Option<&CancellationToken>,
) -> Result<Connection> {
    let n = buckets.len();
    let mut neighbors = NeighborGraph::new(n);

    for &selection in ordering.vertices() {
        cancel::poll(cancellation)?;

        let rest = sorted::difference(buckets.get(selection), &[selection]);
        let Some(minimum) = ordering.minimum(&rest) else {
            continue;
        };

        trace!(from = %selection, to = %minimum, ?rest, "linking bucket");
        buckets.merge(minimum, &rest);
        neighbors.add_edge(selection, minimum);
    }

    debug!(edges = neighbors.edge_count(), vertices = n, "linked buckets");

    // Every vertex is a decomposition node; the first one by identifier is the root.
    let root = Vertex::from_index(0);
    let reconnections = reconnect(&mut neighbors, buckets, root, cancellation)?;

    Ok(Connection {
        root,
        neighbors,
        reconnections,
    })
}

/// Join every component not reachable from `root` until `neighbors` is a single tree.
///
/// Components are taken in order of their smallest unreached vertex. Each one is attached to
/// the outside vertex whose bucket shares the most vertices with the component vertex's
/// bucket; the first candidate wins among equals, and with no positive overlap the component
/// hangs off `root`. Returns the number of edges added.
pub(crate) fn reconnect(
    neighbors: &mut NeighborGraph,
    buckets: &Buckets,
    root: Vertex,
    cancellation: Option<&CancellationToken>,
) -> Result<usize> {
    let n = neighbors.vertex_count();
    if neighbors.edge_count() + 1 >= n {
        return Ok(0);
    }

    let relevant: Vec<Vertex> = (0..n).map(Vertex::from_index).collect();
    let mut unreached = sorted::difference(&relevant, &neighbors.reachable(root));
    let mut reconnections = 0;

    while let Some(&current) = unreached.first() {
        cancel::poll(cancellation)?;

        let reachable = neighbors.reachable(current);
        let content = buckets.get(current);

        let mut best: Option<Vertex> = None;
        let mut best_overlap = 0;
        for candidate in sorted::difference(&relevant, &reachable) {
            let overlap = sorted::intersection_size(content, buckets.get(candidate));
            // strict comparison keeps the first candidate among equals
            if overlap > best_overlap {
                best = Some(candidate);
                best_overlap = overlap;
            }
        }
        let target = best.unwrap_or(root);

        trace!(
            component = %current,
            size = reachable.len(),
            %target,
            overlap = best_overlap,
            "reconnecting component"
        );

        unreached = sorted::difference(&unreached, &reachable);
        neighbors.add_edge(target, current);
        reconnections += 1;
    }

    debug!(reconnections, "reconnected bucket forest");
    Ok(reconnections)
}
