//! Bit-string to bit-vector conversion utilities.
//!
//! The cipher operates on bit vectors (`Vec<u8>` of 0/1 elements); callers
//! usually hold `'0'`/`'1'` strings. Parsing is strict: any character other
//! than `'0'` or `'1'` is rejected rather than silently stripped, so a
//! malformed input can never reach the cipher as a truncated bit vector.

use crate::error::SdesError;

/// Parses a string of `'0'`/`'1'` characters into a bit vector.
///
/// # Parameters
/// - `input`: Bit string of any length; length validation happens at the
///   cipher boundary, not here.
///
/// # Returns
/// A `Vec<u8>` with one 0/1 element per input character.
///
/// # Errors
/// Returns [`SdesError::InvalidCharacter`] with the zero-based position of
/// the first character that is not `'0'` or `'1'`.
pub fn bit_string_to_bits(input: &str) -> Result<Vec<u8>, SdesError> {
    input
        .chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(SdesError::InvalidCharacter { position }),
        })
        .collect()
}

/// Renders a bit vector as its canonical `'0'`/`'1'` string.
///
/// The output has exactly one character per input bit.
pub fn bits_to_bit_string(bits: &[u8]) -> String {
    bits.iter()
        .map(|&b| if b == 0 { '0' } else { '1' })
        .collect()
}
