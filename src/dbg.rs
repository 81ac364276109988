use crate::bloom::Bloom;
use crate::graph::DirectedGraph;
use crate::kmer::{Direction, Kmer, NUM_BASES};

/// Represents an implicit de Bruijn graph over k-mer space, backed by a
/// membership set.
///
/// No vertex or edge is ever stored: a k-mer is a vertex iff the membership
/// set reports it present, and its neighbors are computed on demand by
/// testing the four possible single-base extensions. The set is the sole
/// state, so the graph costs nothing beyond the set itself no matter how
/// many k-mers it covers.
#[derive(Debug)]
pub struct BloomDbg<'a, B, const K: usize> {
    bloom: &'a B,
}

impl<'a, B: Bloom<K>, const K: usize> BloomDbg<'a, B, K> {
    /// Wrap a membership set in a graph view.
    #[must_use]
    pub fn new(bloom: &'a B) -> Self {
        BloomDbg { bloom }
    }

    /// A diagnostic index for the vertex: its hash modulo the membership
    /// set's table size. Distinct vertices may collide; this is an ordering
    /// aid, not an identity.
    ///
    /// # Panics
    ///
    /// Panics if the membership set's table size does not fit in a `u64`.
    #[must_use]
    pub fn index_of(&self, v: &Kmer<K>) -> usize {
        let table_size = u64::try_from(self.bloom.table_size()).unwrap();
        usize::try_from(self.bloom.hash(v) % table_size).unwrap()
    }
}

impl<B: Bloom<K>, const K: usize> DirectedGraph for BloomDbg<'_, B, K> {
    type V = Kmer<K>;

    fn contains_vertex(&self, v: &Kmer<K>) -> bool {
        self.bloom.contains(v)
    }

    fn out_neighbors(&self, v: &Kmer<K>) -> impl Iterator<Item = Kmer<K>> + '_ {
        let v = *v;
        (0..NUM_BASES)
            .map(move |base| v.shift(Direction::Sense, base))
            .filter(|w| self.bloom.contains(w))
    }

    fn in_neighbors(&self, v: &Kmer<K>) -> impl Iterator<Item = Kmer<K>> + '_ {
        let v = *v;
        (0..NUM_BASES)
            .map(move |base| v.shift(Direction::Antisense, base))
            .filter(|w| self.bloom.contains(w))
    }

    fn vertex_count(&self) -> usize {
        self.bloom.popcount()
    }

    fn complement(&self, v: &Kmer<K>) -> Kmer<K> {
        v.reverse_complement()
    }
}
