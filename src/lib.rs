//! S-DES simplified block cipher core.
//!
//! S-DES ("Simplified DES") is a pedagogical Feistel cipher operating on
//! 8-bit blocks with a 10-bit key. It reproduces the structure of DES —
//! initial/final permutations, a key schedule built from permutation and
//! rotation tables, an expansion/substitution/permutation round function —
//! at a scale where every intermediate value can be followed by hand.
//!
//! This crate provides the encrypt/decrypt primitives and an exhaustive
//! key-recovery search over the full 1024-key space using parallel workers.
//!
//! # Architecture
//!
//! ```text
//! permute       (fixed-table bit permutation and rotation primitives)
//!     ↓
//! key_schedule  (10-bit master key → two 8-bit round keys K1, K2)
//!     ↓
//! round         (round function F — expansion, key mixing, S0/S1, P4)
//!     ↓
//! cipher        (two-round Feistel encrypt/decrypt with IP / IP⁻¹)
//!     ↓
//! search        (thread-per-chunk exhaustive scan of all 2^10 keys)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a single 8-bit block:
//!
//! ```
//! use sdes::{decrypt, encrypt};
//!
//! let plaintext = [1, 0, 1, 1, 1, 1, 0, 1];
//! let key = [0, 1, 1, 1, 1, 1, 1, 1, 0, 1];
//!
//! let ciphertext = encrypt(&plaintext, &key).unwrap();
//! assert_eq!(ciphertext, [1, 1, 1, 0, 1, 1, 1, 0]);
//!
//! let recovered = decrypt(&ciphertext, &key).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! Recover every key consistent with a known plaintext/ciphertext pair:
//!
//! ```
//! use sdes::{brute_force, encrypt, DEFAULT_WORKERS};
//!
//! let plaintext = [1, 0, 1, 1, 1, 1, 0, 1];
//! let key = [0, 1, 1, 1, 1, 1, 1, 1, 0, 1];
//! let ciphertext = encrypt(&plaintext, &key).unwrap();
//!
//! let outcome = brute_force(&plaintext, &ciphertext, DEFAULT_WORKERS).unwrap();
//! assert!(outcome.keys.iter().any(|k| k[..] == key));
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod utils;

pub(crate) mod key_schedule;
pub(crate) mod permute;
pub(crate) mod round;

mod cipher;
mod search;

pub use cipher::{decrypt, decrypt_binary, encrypt, encrypt_binary};
pub use search::{brute_force, SearchOutcome, DEFAULT_WORKERS};

/// Number of bits in a plaintext or ciphertext block.
pub const BLOCK_BITS: usize = 8;

/// Number of bits in a master key.
pub const KEY_BITS: usize = 10;
