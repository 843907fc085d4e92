//! Fixed permutation tables and the bit-permutation primitives.
//!
//! Every other component is built on [`permute`]: the key schedule, the
//! round function and the cipher itself only ever reorder, select or
//! duplicate bits through one of the tables below. Left rotation is also
//! expressed as a permutation ([`LS1`], [`LS2`]) rather than as shift
//! arithmetic.
//!
//! All tables use 1-based source positions, following the convention of
//! the DES literature. They are process-wide constants and never mutated,
//! so concurrent readers need no synchronization.

/// P10: initial 10-bit key permutation of the key schedule.
pub(crate) const P10: [usize; 10] = [3, 5, 2, 7, 4, 10, 1, 9, 8, 6];

/// P8: 10 → 8 compression permutation producing a round key.
pub(crate) const P8: [usize; 8] = [6, 3, 7, 4, 8, 5, 10, 9];

/// IP: initial permutation applied to the block before round 1.
pub(crate) const IP: [usize; 8] = [2, 6, 3, 1, 4, 8, 5, 7];

/// IP⁻¹: final permutation, the exact inverse of [`IP`].
pub(crate) const IP_INV: [usize; 8] = [4, 1, 3, 5, 7, 2, 8, 6];

/// EP: 4 → 8 expansion permutation of the round function (duplicates
/// two input bits).
pub(crate) const EP: [usize; 8] = [4, 1, 2, 3, 2, 3, 4, 1];

/// P4: final 4-bit permutation of the round function.
pub(crate) const P4: [usize; 4] = [2, 4, 3, 1];

/// LS1: rotate a 5-bit half-key left by one position.
pub(crate) const LS1: [usize; 5] = [2, 3, 4, 5, 1];

/// LS2: rotate a 5-bit half-key left by two positions.
pub(crate) const LS2: [usize; 5] = [3, 4, 5, 1, 2];

/// Applies a 1-based permutation table to a bit vector.
///
/// Output bit `i` is `bits[table[i] - 1]`; the output length equals the
/// table length, so a table may select, reorder or duplicate input bits.
///
/// Table values must lie in `[1, bits.len()]`. All tables in this crate
/// are fixed constants, so this is a programming contract rather than a
/// runtime-validated condition.
pub(crate) fn permute(bits: &[u8], table: &[usize]) -> Vec<u8> {
    debug_assert!(table.iter().all(|&i| (1..=bits.len()).contains(&i)));
    table.iter().map(|&i| bits[i - 1]).collect()
}

/// Element-wise XOR of two equal-length bit vectors.
pub(crate) fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}
