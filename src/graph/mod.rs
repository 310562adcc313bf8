//! Graph trace engine
//!
//! Operates over a fixed vertex/edge set and never mutates the caller's
//! graph: BFS, DFS, and Dijkstra read edges only; Kruskal builds a new edge
//! subset. Traversal is directed — only `source → target` is walkable — and
//! an edge without an explicit weight counts as weight 1.
//!
//! Each algorithm yields one snapshot per externally observable event:
//! a vertex visit (BFS/DFS), an accepted MST edge (Kruskal), or a finalized
//! vertex (Dijkstra).

pub mod union_find;

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::snapshot::{MstEdge, MstSnapshot, VisitSnapshot};
use union_find::UnionFind;

/// Vertex identifier. Opaque to the engine; display text to the driver.
pub type VertexId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
}

impl Vertex {
    pub fn new(id: &str) -> Self {
        Vertex { id: id.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    pub source: VertexId,
    pub target: VertexId,
    pub weight: Option<u64>,
}

impl Edge {
    pub fn new(id: &str, source: &str, target: &str, weight: Option<u64>) -> Self {
        Edge {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            weight,
        }
    }

    /// Effective weight; unweighted edges count as 1.
    pub fn weight(&self) -> u64 {
        self.weight.unwrap_or(1)
    }
}

/// Errors surfaced at the graph boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a vertex that is not in the vertex set.
    UnknownVertex { edge: String, vertex: VertexId },
    /// The requested traversal start is not in the vertex set.
    UnknownStart { vertex: VertexId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex { edge, vertex } => {
                write!(f, "Edge '{}' references unknown vertex '{}'", edge, vertex)
            }
            GraphError::UnknownStart { vertex } => {
                write!(f, "Start vertex '{}' is not in the graph", vertex)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Which traversal [`traverse`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

/// An immutable vertex/edge set.
///
/// Construction validates that every edge endpoint names an existing vertex;
/// nothing after construction can break that invariant.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let known: FxHashSet<&str> = vertices.iter().map(|v| v.id.as_str()).collect();
        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !known.contains(endpoint.as_str()) {
                    return Err(GraphError::UnknownVertex {
                        edge: edge.id.clone(),
                        vertex: endpoint.clone(),
                    });
                }
            }
        }
        Ok(Graph { vertices, edges })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn check_start(&self, start: &str) -> Result<(), GraphError> {
        if self.vertices.iter().any(|v| v.id == start) {
            Ok(())
        } else {
            Err(GraphError::UnknownStart {
                vertex: start.to_string(),
            })
        }
    }

    /// Out-edge targets of `vertex`, in edge-list order.
    fn neighbors(&self, vertex: &str) -> Vec<VertexId> {
        self.edges
            .iter()
            .filter(|e| e.source == vertex)
            .map(|e| e.target.clone())
            .collect()
    }
}

/// Breadth-first or depth-first traversal from `start`, one snapshot of the
/// accumulated visit order per vertex visited.
pub fn traverse(
    kind: TraversalKind,
    graph: &Graph,
    start: &str,
) -> Result<Vec<VisitSnapshot>, GraphError> {
    graph.check_start(start)?;
    match kind {
        TraversalKind::Bfs => Ok(bfs(graph, start)),
        TraversalKind::Dfs => Ok(dfs(graph, start)),
    }
}

fn bfs(graph: &Graph, start: &str) -> Vec<VisitSnapshot> {
    let mut queue: VecDeque<VertexId> = VecDeque::from([start.to_string()]);
    let mut visited: FxHashSet<VertexId> = FxHashSet::default();
    let mut order: Vec<VertexId> = Vec::new();
    let mut steps = Vec::new();

    while let Some(current) = queue.pop_front() {
        // A vertex can be enqueued more than once; it is visited on its
        // first dequeue only.
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());
        steps.push(VisitSnapshot {
            visited: order.clone(),
        });

        for edge in graph.edges() {
            if edge.source == current && !visited.contains(&edge.target) {
                queue.push_back(edge.target.clone());
            }
        }
    }

    steps
}

fn dfs(graph: &Graph, start: &str) -> Vec<VisitSnapshot> {
    let mut stack: Vec<VertexId> = vec![start.to_string()];
    let mut visited: FxHashSet<VertexId> = FxHashSet::default();
    let mut order: Vec<VertexId> = Vec::new();
    let mut steps = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());
        steps.push(VisitSnapshot {
            visited: order.clone(),
        });

        // Reverse push so the first-listed out-edge is explored first,
        // matching left-to-right recursive DFS.
        let mut neighbors = graph.neighbors(&current);
        neighbors.reverse();
        stack.extend(neighbors);
    }

    steps
}

/// Kruskal's minimum spanning tree, one snapshot of the accumulated edge set
/// per accepted edge.
///
/// Edges are sorted ascending by weight with a stable sort, so equal-weight
/// edges are considered in their original order. An edge joins the MST iff
/// its endpoints are in different components.
pub fn mst(graph: &Graph) -> Vec<MstSnapshot> {
    let mut components = UnionFind::new(graph.vertices().iter().map(|v| v.id.clone()));

    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    sorted.sort_by_key(|e| e.weight());

    let mut accepted: Vec<MstEdge> = Vec::new();
    let mut steps = Vec::new();

    for edge in sorted {
        if components.find(&edge.source) != components.find(&edge.target) {
            components.union(&edge.source, &edge.target);
            accepted.push(MstEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
                weight: edge.weight(),
            });
            steps.push(MstSnapshot {
                edges: accepted.clone(),
            });
        }
    }

    steps
}

/// Result of a single-source shortest-path run.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// One snapshot of the accumulated visit order per finalized vertex.
    pub steps: Vec<VisitSnapshot>,
    /// Final distance from the start to every reachable vertex. Vertices the
    /// run never finalized are absent.
    pub distances: FxHashMap<VertexId, u64>,
}

/// Dijkstra's shortest path from `start`.
///
/// The next vertex is chosen by a stable re-sort of the unvisited list on
/// current distance, so ties fall back to vertex insertion order. The run
/// stops early once the minimum remaining distance is infinite — everything
/// still unvisited is unreachable.
pub fn shortest_path(graph: &Graph, start: &str) -> Result<ShortestPaths, GraphError> {
    graph.check_start(start)?;

    const INFINITY: u64 = u64::MAX;

    let mut dist: FxHashMap<VertexId, u64> = graph
        .vertices()
        .iter()
        .map(|v| (v.id.clone(), INFINITY))
        .collect();
    dist.insert(start.to_string(), 0);

    let mut unvisited: Vec<VertexId> = graph.vertices().iter().map(|v| v.id.clone()).collect();
    let mut order: Vec<VertexId> = Vec::new();
    let mut steps = Vec::new();

    while !unvisited.is_empty() {
        unvisited.sort_by_key(|id| dist[id]);
        let current = unvisited.remove(0);
        let current_dist = dist[&current];
        if current_dist == INFINITY {
            break;
        }

        order.push(current.clone());
        steps.push(VisitSnapshot {
            visited: order.clone(),
        });

        for edge in graph.edges() {
            if edge.source != current {
                continue;
            }
            let candidate = current_dist + edge.weight();
            if candidate < dist[&edge.target] {
                dist.insert(edge.target.clone(), candidate);
            }
        }
    }

    dist.retain(|_, d| *d != INFINITY);
    Ok(ShortestPaths {
        steps,
        distances: dist,
    })
}
