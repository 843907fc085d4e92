//! Two-round Feistel block cipher: encrypt and decrypt.
//!
//! Encryption and decryption share one structure; the only difference is
//! the order in which the two round keys are consumed. Exactly two rounds
//! are performed (this is S-DES, not a general N-round construction): the
//! halves are swapped after round 1 and *not* after round 2.

use crate::error::SdesError;
use crate::key_schedule::round_keys;
use crate::permute::{permute, xor, IP, IP_INV};
use crate::round::f;
use crate::utils::converter::{bit_string_to_bits, bits_to_bit_string};
use crate::{BLOCK_BITS, KEY_BITS};

/// Checks a bit vector against its context-required length.
fn check_length(bits: &[u8], expected: usize) -> Result<(), SdesError> {
    if bits.len() != expected {
        return Err(SdesError::InvalidLength {
            expected,
            actual: bits.len(),
        });
    }
    Ok(())
}

/// Runs the two-round Feistel structure with the given round-key order.
///
/// `IP → round(first) → swap → round(second) → IP⁻¹`. Encryption passes
/// `(K1, K2)`, decryption `(K2, K1)`; everything else is identical.
fn feistel(block: &[u8], first: &[u8], second: &[u8]) -> Vec<u8> {
    let ip = permute(block, &IP);
    let (left, right) = ip.split_at(4);

    // Round 1, then swap the halves.
    let mixed = xor(left, &f(right, first));
    let (left, right) = (right, mixed.as_slice());

    // Round 2, no swap afterwards.
    let mut preoutput = xor(left, &f(right, second));
    preoutput.extend_from_slice(right);

    permute(&preoutput, &IP_INV)
}

/// Encrypts one 8-bit block without input validation.
///
/// Used by the brute-force hot loop, where every candidate key is
/// well-formed by construction.
pub(crate) fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Vec<u8> {
    let (k1, k2) = round_keys(key);
    feistel(plaintext, &k1, &k2)
}

/// Decrypts one 8-bit block without input validation.
pub(crate) fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Vec<u8> {
    let (k1, k2) = round_keys(key);
    feistel(ciphertext, &k2, &k1)
}

/// Encrypts an 8-bit plaintext block with a 10-bit key.
///
/// # Parameters
/// - `plaintext`: 8-bit vector (elements 0 or 1).
/// - `key`: 10-bit vector.
///
/// # Returns
/// The 8-bit ciphertext block.
///
/// # Errors
/// Returns [`SdesError::InvalidLength`] if either input does not have the
/// exact required length. No partial computation is attempted.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, SdesError> {
    check_length(plaintext, BLOCK_BITS)?;
    check_length(key, KEY_BITS)?;
    Ok(encrypt_block(plaintext, key))
}

/// Decrypts an 8-bit ciphertext block with a 10-bit key.
///
/// Inverts [`encrypt`] exactly: the round keys are consumed in reverse
/// order, which is the defining property of the Feistel construction.
///
/// # Errors
/// Returns [`SdesError::InvalidLength`] if either input does not have the
/// exact required length.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, SdesError> {
    check_length(ciphertext, BLOCK_BITS)?;
    check_length(key, KEY_BITS)?;
    Ok(decrypt_block(ciphertext, key))
}

/// Encrypts a plaintext given as a `'0'`/`'1'` string, returning the
/// ciphertext in the same form.
///
/// # Errors
/// Returns [`SdesError::InvalidCharacter`] for non-binary characters and
/// [`SdesError::InvalidLength`] for wrong lengths.
pub fn encrypt_binary(plaintext: &str, key: &str) -> Result<String, SdesError> {
    let plaintext_bits = bit_string_to_bits(plaintext)?;
    let key_bits = bit_string_to_bits(key)?;
    let cipher_bits = encrypt(&plaintext_bits, &key_bits)?;
    Ok(bits_to_bit_string(&cipher_bits))
}

/// Decrypts a ciphertext given as a `'0'`/`'1'` string, returning the
/// plaintext in the same form.
///
/// # Errors
/// Returns [`SdesError::InvalidCharacter`] for non-binary characters and
/// [`SdesError::InvalidLength`] for wrong lengths.
pub fn decrypt_binary(ciphertext: &str, key: &str) -> Result<String, SdesError> {
    let cipher_bits = bit_string_to_bits(ciphertext)?;
    let key_bits = bit_string_to_bits(key)?;
    let plain_bits = decrypt(&cipher_bits, &key_bits)?;
    Ok(bits_to_bit_string(&plain_bits))
}
