use std::fmt::Debug;
use std::hash::Hash;

/// The read-only query contract of a directed graph.
///
/// Any implementation can be searched by [`crate::search::all_paths_between`]
/// without modification; the implicit Bloom-backed de Bruijn graph
/// ([`crate::dbg::BloomDbg`]) and the explicit [`crate::overlap::OverlapGraph`]
/// both satisfy it.
///
/// Neighbor iterators are finite, lazily computed, and restartable: each call
/// yields a fresh sequence in a fixed deterministic order. Querying a vertex
/// that does not exist is not an error; it yields no neighbors and degree 0.
pub trait DirectedGraph {
    /// The vertex descriptor type.
    type V: Clone + Eq + Hash + Debug;

    /// Report whether the vertex exists in the graph.
    fn contains_vertex(&self, v: &Self::V) -> bool;

    /// Iterate over the vertices reachable from `v` by one directed edge.
    fn out_neighbors(&self, v: &Self::V) -> impl Iterator<Item = Self::V> + '_;

    /// Iterate over the vertices with a directed edge into `v`.
    fn in_neighbors(&self, v: &Self::V) -> impl Iterator<Item = Self::V> + '_;

    /// The number of out-edges of `v`.
    fn out_degree(&self, v: &Self::V) -> usize {
        self.out_neighbors(v).count()
    }

    /// The number of in-edges of `v`.
    fn in_degree(&self, v: &Self::V) -> usize {
        self.in_neighbors(v).count()
    }

    /// The number of vertices in the graph. May be approximate when the
    /// backing store is probabilistic.
    fn vertex_count(&self) -> usize;

    /// The complement of a vertex (its reverse-complement strand for k-mer
    /// graphs). Must be involutive. Strand-symmetric graphs return the
    /// vertex itself.
    fn complement(&self, v: &Self::V) -> Self::V;
}
