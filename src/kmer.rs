use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

/// The number of distinct bases a k-mer can be extended by at either end.
pub const NUM_BASES: u8 = 4;

/// Direction of a single-base k-mer shift: `Sense` drops the first base and
/// appends the new base at the end; `Antisense` drops the last base and
/// prepends the new base at the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sense,
    Antisense,
}

/// Convert a nucleotide character to its 2-bit code (A=0, C=1, G=2, T=3).
#[must_use]
pub fn base_to_code(base: u8) -> Option<u8> {
    match base {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'T' | b't' => Some(3),
        _ => None,
    }
}

/// Convert a 2-bit base code back to its nucleotide character.
///
/// # Panics
///
/// Panics if `code` is not a 2-bit base code (0 through 3).
#[must_use]
pub fn code_to_base(code: u8) -> u8 {
    assert!(code < NUM_BASES, "base code out of range: {code}");
    [b'A', b'C', b'G', b'T'][usize::from(code)]
}

/// Represents a fixed-width k-mer, packed two bits per base with the first
/// base in the highest occupied bits. `K` must be between 1 and 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kmer<const K: usize>(u64);

impl<const K: usize> Kmer<K> {
    const MASK: u64 = u64::MAX >> (64 - 2 * K);

    /// Parse a k-mer from a byte slice of nucleotide characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly `K` bases long, or if it
    /// contains a character other than A, C, G, or T.
    pub fn from_bytes(seq: &[u8]) -> Result<Self> {
        if seq.len() != K {
            bail!("expected a {}-mer, got {} bases", K, seq.len());
        }

        let mut bits = 0u64;
        for &b in seq {
            let Some(code) = base_to_code(b) else {
                bail!("invalid nucleotide '{}' in k-mer", b as char);
            };
            bits = (bits << 2) | u64::from(code);
        }

        Ok(Kmer(bits & Self::MASK))
    }

    /// Return the 2-bit code of the base at position `i` (0-based, from the
    /// first base).
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than `K`.
    #[must_use]
    pub fn base(&self, i: usize) -> u8 {
        assert!(i < K, "base index {} out of range for a {}-mer", i, K);
        u8::try_from((self.0 >> (2 * (K - 1 - i))) & 0b11).unwrap()
    }

    /// Shift the k-mer by one base in the given direction, dropping the base
    /// at the opposite end. `base` is a 2-bit code.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not a 2-bit base code (0 through 3).
    #[must_use]
    pub fn shift(self, direction: Direction, base: u8) -> Self {
        assert!(base < NUM_BASES, "base code out of range: {base}");
        match direction {
            Direction::Sense => Kmer(((self.0 << 2) | u64::from(base)) & Self::MASK),
            Direction::Antisense => {
                Kmer((self.0 >> 2) | (u64::from(base) << (2 * (K - 1))))
            }
        }
    }

    /// Return the reverse complement of the k-mer.
    #[must_use]
    pub fn reverse_complement(self) -> Self {
        let mut bits = 0u64;
        let mut fwd = self.0;

        for _ in 0..K {
            bits = (bits << 2) | ((fwd & 0b11) ^ 0b11);
            fwd >>= 2;
        }

        Kmer(bits)
    }

    /// Return the canonical form of the k-mer: the numerically smaller of the
    /// k-mer and its reverse complement.
    #[must_use]
    pub fn canonical(self) -> Self {
        self.min(self.reverse_complement())
    }

    /// Return the packed 2-bit representation.
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.0
    }
}

impl<const K: usize> fmt::Display for Kmer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..K {
            write!(f, "{}", code_to_base(self.base(i)) as char)?;
        }
        Ok(())
    }
}

impl<const K: usize> FromStr for Kmer<K> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_bytes_round_trip() {
        let kmer: Kmer<5> = "ACGTC".parse().unwrap();

        assert_eq!(kmer.to_string(), "ACGTC");
    }

    #[test]
    fn test_from_bytes_accepts_lowercase() {
        let kmer: Kmer<5> = "acgtc".parse().unwrap();

        assert_eq!(kmer.to_string(), "ACGTC");
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert!(Kmer::<5>::from_bytes(b"ACGT").is_err());
        assert!(Kmer::<5>::from_bytes(b"ACGTCA").is_err());
    }

    #[test]
    fn test_from_bytes_rejects_invalid_base() {
        assert!(Kmer::<5>::from_bytes(b"ACGTN").is_err());
    }

    #[test]
    fn test_base_accessor() {
        let kmer: Kmer<4> = "ACGT".parse().unwrap();

        assert_eq!(kmer.base(0), 0);
        assert_eq!(kmer.base(1), 1);
        assert_eq!(kmer.base(2), 2);
        assert_eq!(kmer.base(3), 3);
    }

    #[test]
    fn test_shift_sense() {
        let kmer: Kmer<5> = "ACGTC".parse().unwrap();
        let shifted = kmer.shift(Direction::Sense, base_to_code(b'G').unwrap());

        assert_eq!(shifted.to_string(), "CGTCG");
    }

    #[test]
    fn test_shift_antisense() {
        let kmer: Kmer<5> = "ACGTC".parse().unwrap();
        let shifted = kmer.shift(Direction::Antisense, base_to_code(b'T').unwrap());

        assert_eq!(shifted.to_string(), "TACGT");
    }

    #[test]
    fn test_shift_preserves_length() {
        let kmer: Kmer<7> = "ACGTCGA".parse().unwrap();

        for code in 0..NUM_BASES {
            assert_eq!(kmer.shift(Direction::Sense, code).to_string().len(), 7);
            assert_eq!(kmer.shift(Direction::Antisense, code).to_string().len(), 7);
        }
    }

    #[test]
    fn test_reverse_complement() {
        let kmer: Kmer<5> = "AAACC".parse().unwrap();

        assert_eq!(kmer.reverse_complement().to_string(), "GGTTT");
    }

    #[test]
    fn test_reverse_complement_palindrome() {
        let kmer: Kmer<4> = "ACGT".parse().unwrap();

        assert_eq!(kmer.reverse_complement(), kmer);
    }

    #[test]
    fn test_canonical_picks_smaller_strand() {
        let fwd: Kmer<5> = "GGTTT".parse().unwrap();
        let rev: Kmer<5> = "AAACC".parse().unwrap();

        assert_eq!(fwd.canonical(), rev);
        assert_eq!(rev.canonical(), rev);
    }

    #[test]
    fn test_full_width_kmer() {
        let seq = "ACGTACGTACGTACGTACGTACGTACGTACGT";
        let kmer: Kmer<32> = seq.parse().unwrap();

        assert_eq!(kmer.to_string(), seq);
    }
}
