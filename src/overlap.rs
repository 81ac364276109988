use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use anyhow::{anyhow, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::graph::DirectedGraph;

/// Represents an explicit directed graph over arbitrary vertices, such as a
/// contig-overlap graph.
///
/// Satisfies the same [`DirectedGraph`] contract as the implicit Bloom-backed
/// de Bruijn graph, so the path search runs over either without change.
/// Vertices here carry no strand: `complement` is the identity.
#[derive(Debug)]
pub struct OverlapGraph<V: Clone + Eq + Hash + Debug> {
    g: DiGraph<V, ()>,
    idx: HashMap<V, NodeIndex>,
}

impl<V: Clone + Eq + Hash + Debug> Default for OverlapGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash + Debug> OverlapGraph<V> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        OverlapGraph {
            g: DiGraph::new(),
            idx: HashMap::new(),
        }
    }

    /// Add a vertex to the graph, returning its node index. Adding a vertex
    /// that already exists returns the existing index.
    pub fn add_vertex(&mut self, v: V) -> NodeIndex {
        if let Some(ni) = self.idx.get(&v) {
            return *ni;
        }

        let ni = self.g.add_node(v.clone());
        self.idx.insert(v, ni);

        ni
    }

    /// Add a directed edge, inserting either endpoint if missing.
    pub fn add_edge(&mut self, from: V, to: V) {
        let n1 = self.add_vertex(from);
        let n2 = self.add_vertex(to);

        self.g.add_edge(n1, n2, ());
    }

    /// Get the internal index associated with a particular vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the graph.
    pub fn get_index(&self, v: &V) -> Result<NodeIndex> {
        self.idx
            .get(v)
            .copied()
            .ok_or_else(|| anyhow!("vertex {v:?} not found"))
    }

    /// The number of directed edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.g.edge_count()
    }

    fn neighbors(&self, v: &V, dir: Direction) -> impl Iterator<Item = V> + '_ {
        self.idx
            .get(v)
            .into_iter()
            .flat_map(move |ni| self.g.neighbors_directed(*ni, dir))
            .map(|ni| self.g[ni].clone())
    }
}

impl<V: Clone + Eq + Hash + Debug> DirectedGraph for OverlapGraph<V> {
    type V = V;

    fn contains_vertex(&self, v: &V) -> bool {
        self.idx.contains_key(v)
    }

    fn out_neighbors(&self, v: &V) -> impl Iterator<Item = V> + '_ {
        self.neighbors(v, Direction::Outgoing)
    }

    fn in_neighbors(&self, v: &V) -> impl Iterator<Item = V> + '_ {
        self.neighbors(v, Direction::Incoming)
    }

    fn vertex_count(&self) -> usize {
        self.g.node_count()
    }

    fn complement(&self, v: &V) -> V {
        v.clone()
    }
}
