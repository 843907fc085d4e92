//! Round function F: expansion, key mixing, S-box substitution, P4.
//!
//! F is the only non-linear element of the cipher. A 4-bit half-block is
//! expanded to 8 bits, XORed with the round key, pushed through the two
//! substitution boxes (4 bits → 2 bits each) and finally permuted by P4.

use crate::permute::{permute, xor, EP, P4};

/// S0: substitution box for the first 4-bit half of the key-mixed value.
const S0: [[u8; 4]; 4] = [[1, 0, 3, 2], [3, 2, 1, 0], [0, 2, 1, 3], [3, 1, 0, 2]];

/// S1: substitution box for the second 4-bit half.
const S1: [[u8; 4]; 4] = [[0, 1, 2, 3], [2, 3, 1, 0], [3, 0, 1, 2], [2, 1, 0, 3]];

/// Looks up 4 input bits in a substitution box, producing 2 output bits.
///
/// The outer bits select the row (`row = b0*2 + b3`), the inner bits the
/// column (`col = b1*2 + b2`). The 2-bit table value is re-expanded into
/// its high and low bit.
fn sbox_lookup(bits: &[u8], sbox: &[[u8; 4]; 4]) -> [u8; 2] {
    debug_assert_eq!(bits.len(), 4);
    let row = (bits[0] * 2 + bits[3]) as usize;
    let col = (bits[1] * 2 + bits[2]) as usize;
    let value = sbox[row][col];
    [(value >> 1) & 1, value & 1]
}

/// The round function F.
///
/// Maps a 4-bit half-block and an 8-bit round key to 4 bits:
/// `P4(S0(left) ‖ S1(right))` where `left ‖ right = EP(half) ⊕ key`.
/// Pure and deterministic, no side effects.
pub(crate) fn f(right: &[u8], round_key: &[u8]) -> Vec<u8> {
    debug_assert_eq!(right.len(), 4);
    debug_assert_eq!(round_key.len(), 8);

    let expanded = permute(right, &EP);
    let mixed = xor(&expanded, round_key);

    let left_sub = sbox_lookup(&mixed[..4], &S0);
    let right_sub = sbox_lookup(&mixed[4..], &S1);

    let substituted = [left_sub[0], left_sub[1], right_sub[0], right_sub[1]];
    permute(&substituted, &P4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbox_lookup_row_col_derivation() {
        // [1,1,0,1]: row = 1*2+1 = 3, col = 1*2+0 = 2 → S0[3][2] = 0
        assert_eq!(sbox_lookup(&[1, 1, 0, 1], &S0), [0, 0]);
        // [1,0,0,1]: row = 3, col = 0 → S1[3][0] = 2
        assert_eq!(sbox_lookup(&[1, 0, 0, 1], &S1), [1, 0]);
    }

    #[test]
    fn test_sbox_lookup_covers_all_rows() {
        // Same inner bits, all four outer-bit combinations walk the rows of S0.
        assert_eq!(sbox_lookup(&[0, 0, 0, 0], &S0), [0, 1]); // S0[0][0] = 1
        assert_eq!(sbox_lookup(&[0, 0, 0, 1], &S0), [1, 1]); // S0[1][0] = 3
        assert_eq!(sbox_lookup(&[1, 0, 0, 0], &S0), [0, 0]); // S0[2][0] = 0
        assert_eq!(sbox_lookup(&[1, 0, 0, 1], &S0), [1, 1]); // S0[3][0] = 3
    }

    #[test]
    fn test_sbox_output_is_two_bits() {
        for value in 0..16u8 {
            let bits = [
                (value >> 3) & 1,
                (value >> 2) & 1,
                (value >> 1) & 1,
                value & 1,
            ];
            for sbox in [&S0, &S1] {
                let out = sbox_lookup(&bits, sbox);
                assert!(out[0] <= 1 && out[1] <= 1);
            }
        }
    }

    #[test]
    fn test_f_known_values() {
        // Intermediate values of the golden encryption
        // (plaintext 10111101, key 0111111101).
        assert_eq!(
            f(&[1, 1, 1, 0], &[0, 1, 0, 1, 1, 1, 1, 1]),
            vec![0, 1, 0, 0]
        );
        assert_eq!(
            f(&[0, 0, 1, 1], &[1, 1, 1, 1, 1, 1, 0, 0]),
            vec![0, 0, 0, 1]
        );
    }

    #[test]
    fn test_f_deterministic() {
        let right = [0, 1, 1, 0];
        let key = [1, 0, 0, 1, 1, 0, 1, 0];
        let first = f(&right, &key);
        for _ in 0..10 {
            assert_eq!(f(&right, &key), first);
        }
    }

    #[test]
    fn test_f_output_length() {
        for half in 0..16u8 {
            let right = [
                (half >> 3) & 1,
                (half >> 2) & 1,
                (half >> 1) & 1,
                half & 1,
            ];
            let out = f(&right, &[0, 1, 0, 1, 0, 1, 0, 1]);
            assert_eq!(out.len(), 4);
            assert!(out.iter().all(|&b| b <= 1));
        }
    }
}
