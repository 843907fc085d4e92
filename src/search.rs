//! Exhaustive key search over the full 1024-key space.
//!
//! The key space is enumerated in binary counting order (MSB first) and
//! split into contiguous chunks, one scoped worker thread per chunk. Each
//! worker encrypts the known plaintext under every candidate key in its
//! chunk and keeps a local list of matches, so the hot loop takes no lock;
//! the single-threaded merge after the join concatenates the lists and
//! sorts them ascending by the key's integer value, making the output
//! order deterministic regardless of thread scheduling.
//!
//! There is no early termination: degenerate (plaintext, ciphertext) pairs
//! can have zero or several consistent keys, and all of them are reported.

use std::thread;
use std::time::{Duration, Instant};

use crate::cipher::encrypt_block;
use crate::error::SdesError;
use crate::{BLOCK_BITS, KEY_BITS};

/// Number of keys in the full 10-bit key space.
const KEY_SPACE: usize = 1 << KEY_BITS;

/// Default number of search workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Result of an exhaustive key search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Every 10-bit key whose encryption of the plaintext matches the
    /// ciphertext, sorted ascending by the key's integer value.
    pub keys: Vec<Vec<u8>>,
    /// Wall-clock time spent scanning the key space.
    pub elapsed: Duration,
}

/// Expands a key index into its 10-bit vector, MSB first.
fn key_from_index(index: u16) -> Vec<u8> {
    (0..KEY_BITS)
        .map(|i| ((index >> (KEY_BITS - 1 - i)) & 1) as u8)
        .collect()
}

/// Searches the full key space for every key that encrypts `plaintext`
/// to `ciphertext`.
///
/// # Parameters
/// - `plaintext`: Known 8-bit plaintext block.
/// - `ciphertext`: Known 8-bit ciphertext block.
/// - `worker_count`: Number of parallel workers, in [1, 1024]. Workers are
///   spawned at search start and joined before this function returns.
///
/// # Returns
/// A [`SearchOutcome`] with all matching keys (possibly empty) and the
/// elapsed wall-clock time. The key set is identical for every worker
/// count; only the partitioning changes.
///
/// # Errors
/// Returns [`SdesError::InvalidLength`] if either block is not exactly
/// 8 bits, or [`SdesError::InvalidWorkerCount`] if `worker_count` is 0 or
/// exceeds the key-space size.
///
/// # Panics
/// A panicking worker indicates a broken internal invariant (every
/// enumerated candidate key is well-formed by construction); the panic is
/// propagated at the join and aborts the whole search.
pub fn brute_force(
    plaintext: &[u8],
    ciphertext: &[u8],
    worker_count: usize,
) -> Result<SearchOutcome, SdesError> {
    if plaintext.len() != BLOCK_BITS {
        return Err(SdesError::InvalidLength {
            expected: BLOCK_BITS,
            actual: plaintext.len(),
        });
    }
    if ciphertext.len() != BLOCK_BITS {
        return Err(SdesError::InvalidLength {
            expected: BLOCK_BITS,
            actual: ciphertext.len(),
        });
    }
    if worker_count == 0 || worker_count > KEY_SPACE {
        return Err(SdesError::InvalidWorkerCount);
    }

    let chunk_size = KEY_SPACE / worker_count;
    let start = Instant::now();

    let mut matches: Vec<u16> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(worker_count);
        for worker in 0..worker_count {
            let lo = worker * chunk_size;
            // The last chunk absorbs the remainder of the integer division.
            let hi = if worker == worker_count - 1 {
                KEY_SPACE
            } else {
                lo + chunk_size
            };
            handles.push(scope.spawn(move || {
                let mut local = Vec::new();
                for index in lo..hi {
                    let key = key_from_index(index as u16);
                    if encrypt_block(plaintext, &key) == ciphertext {
                        local.push(index as u16);
                    }
                }
                local
            }));
        }
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("search worker panicked"))
            .collect()
    });

    matches.sort_unstable();
    let elapsed = start.elapsed();

    Ok(SearchOutcome {
        keys: matches.into_iter().map(key_from_index).collect(),
        elapsed,
    })
}
