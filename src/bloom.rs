use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::kmer::Kmer;

/// Default nominal table size for [`ExactKmerSet`], used only to derive
/// diagnostic vertex indices.
const DEFAULT_TABLE_SIZE: usize = 1 << 20;

/// The read-only query contract of a k-mer membership set, e.g. a Bloom
/// filter populated upstream during k-mer counting.
///
/// Implementations must be strand-unified: a k-mer and its reverse complement
/// answer identically, as both spell the same double-stranded DNA word. False
/// positives are permitted (the queries below are treated as ground truth by
/// the graph layer); false negatives are not.
pub trait Bloom<const K: usize> {
    /// Report whether the k-mer is a member of the set.
    fn contains(&self, kmer: &Kmer<K>) -> bool;

    /// Approximate number of distinct k-mers inserted into the set.
    fn popcount(&self) -> usize;

    /// Size of the underlying table, in slots. Implementations guarantee a
    /// non-zero size, so it is safe to reduce a hash modulo this value.
    fn table_size(&self) -> usize;

    /// Hash of the k-mer, as used to address the underlying table.
    fn hash(&self, kmer: &Kmer<K>) -> u64;
}

/// An exact, `HashSet`-backed membership set with zero false positives.
///
/// Stands in for a Bloom filter on data small enough to hold exactly, and
/// serves as the test fixture for the graph layer. K-mers are stored in
/// canonical form, so membership is strand-unified.
#[derive(Debug)]
pub struct ExactKmerSet<const K: usize> {
    kmers: HashSet<Kmer<K>>,
    table_size: usize,
}

impl<const K: usize> ExactKmerSet<K> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        ExactKmerSet {
            kmers: HashSet::new(),
            table_size: DEFAULT_TABLE_SIZE,
        }
    }

    /// Create an empty set with the given nominal table size.
    ///
    /// # Panics
    ///
    /// Panics if `table_size` is zero.
    #[must_use]
    pub fn with_table_size(table_size: usize) -> Self {
        assert!(table_size > 0, "table size must be non-zero");

        ExactKmerSet {
            kmers: HashSet::new(),
            table_size,
        }
    }

    /// Insert a k-mer, unifying it with its reverse complement.
    pub fn insert(&mut self, kmer: Kmer<K>) {
        self.kmers.insert(kmer.canonical());
    }

    /// Build a set from raw sequences by sliding a window of width `K` over
    /// each one. Sequences shorter than `K` contribute nothing.
    ///
    /// # Panics
    ///
    /// Panics if a sequence contains a character other than A, C, G, or T;
    /// cleaning the input is the caller's responsibility.
    #[must_use]
    pub fn from_sequences(seqs: &[Vec<u8>]) -> Self {
        let mut set = Self::new();

        for seq in seqs {
            for window in seq.windows(K) {
                set.insert(Kmer::from_bytes(window).unwrap());
            }
        }

        crate::elog!(
            "Indexed {} distinct {}-mers from {} sequences.",
            set.popcount(),
            K,
            seqs.len()
        );

        set
    }
}

impl<const K: usize> Default for ExactKmerSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const K: usize> Bloom<K> for ExactKmerSet<K> {
    fn contains(&self, kmer: &Kmer<K>) -> bool {
        self.kmers.contains(&kmer.canonical())
    }

    fn popcount(&self) -> usize {
        self.kmers.len()
    }

    fn table_size(&self) -> usize {
        self.table_size
    }

    fn hash(&self, kmer: &Kmer<K>) -> u64 {
        let mut hasher = DefaultHasher::new();
        kmer.canonical().hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = ExactKmerSet::<5>::new();
        let present: Kmer<5> = "AAACC".parse().unwrap();
        let absent: Kmer<5> = "CCCCC".parse().unwrap();

        set.insert(present);

        assert!(set.contains(&present));
        assert!(!set.contains(&absent));
    }

    #[test]
    fn test_contains_is_strand_unified() {
        let mut set = ExactKmerSet::<5>::new();
        let kmer: Kmer<5> = "AAACC".parse().unwrap();

        set.insert(kmer);

        assert!(set.contains(&kmer.reverse_complement()));
    }

    #[test]
    fn test_popcount_counts_distinct_kmers() {
        let mut set = ExactKmerSet::<5>::new();
        let kmer: Kmer<5> = "AAACC".parse().unwrap();

        set.insert(kmer);
        set.insert(kmer);
        set.insert(kmer.reverse_complement());

        assert_eq!(set.popcount(), 1);
    }

    #[test]
    fn test_from_sequences() {
        let set = ExactKmerSet::<5>::from_sequences(&[b"AAACCACACC".to_vec()]);

        assert_eq!(set.popcount(), 6);
        assert!(set.contains(&"AAACC".parse().unwrap()));
        assert!(set.contains(&"CACAC".parse().unwrap()));
    }

    #[test]
    fn test_hash_is_strand_unified() {
        let set = ExactKmerSet::<5>::new();
        let kmer: Kmer<5> = "AAACC".parse().unwrap();

        assert_eq!(set.hash(&kmer), set.hash(&kmer.reverse_complement()));
    }

    #[test]
    fn test_table_size_is_nonzero() {
        assert!(ExactKmerSet::<5>::new().table_size() > 0);
        assert_eq!(ExactKmerSet::<5>::with_table_size(64).table_size(), 64);
    }

    #[test]
    fn test_short_sequences_contribute_nothing() {
        let set = ExactKmerSet::<5>::from_sequences(&[b"ACGT".to_vec()]);

        assert_eq!(set.popcount(), 0);
    }
}
