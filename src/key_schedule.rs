//! Key schedule: derives the two 8-bit round keys from a 10-bit master key.
//!
//! The schedule is a fixed pipeline of permutations and rotations:
//!
//! ```text
//! key ── P10 ── split 5/5 ── LS1 each half ──┬── concat ── P8 ──→ K1
//!                                            └── LS2 each half ── concat ── P8 ──→ K2
//! ```
//!
//! K2 is built from the *once-rotated* halves, so its halves end up rotated
//! by three positions in total relative to the P10 output.

use crate::permute::{permute, LS1, LS2, P10, P8};

/// Derives the round-key pair `(K1, K2)` from a 10-bit master key.
///
/// Pure and deterministic; the same key always yields the same pair.
/// Callers guarantee `key.len() == 10` (the public API validates before
/// reaching this point).
pub(crate) fn round_keys(key: &[u8]) -> (Vec<u8>, Vec<u8>) {
    debug_assert_eq!(key.len(), crate::KEY_BITS);

    let p10 = permute(key, &P10);
    let (left, right) = p10.split_at(5);

    let left_ls1 = permute(left, &LS1);
    let right_ls1 = permute(right, &LS1);
    let mut once = left_ls1.clone();
    once.extend_from_slice(&right_ls1);
    let k1 = permute(&once, &P8);

    let left_ls3 = permute(&left_ls1, &LS2);
    let right_ls3 = permute(&right_ls1, &LS2);
    let mut thrice = left_ls3;
    thrice.extend_from_slice(&right_ls3);
    let k2 = permute(&thrice, &P8);

    (k1, k2)
}
