//! Polynomial string hash.
//!
//! `h₀ = 0`, `hᵢ₊₁ = 127·hᵢ + cᵢ (mod 2^BITS)`, evaluated as
//! `(h << 7) - h + c`. A byte at position `i` of an `n`-byte string
//! contributes with weight `127^(n-1-i)`.

use crate::word::HashWord;

/// Base of the polynomial.
pub const MULTIPLIER: u8 = 127;

/// Terminator of sentinel-delimited strings.
pub const SENTINEL: u8 = 0;

/// Hashes every byte of `bytes`.
#[must_use]
pub fn hash_bytes<I: HashWord>(bytes: &[u8]) -> I {
    bytes.iter().fold(I::ZERO, |h, &c| h.step(c))
}

/// Hashes `buf` up to (not including) the first [`SENTINEL`].
///
/// Bytes after the sentinel are never inspected. A buffer without a sentinel
/// is hashed to its end.
#[must_use]
pub fn hash_c_bytes<I: HashWord>(buf: &[u8]) -> I {
    buf.iter()
        .take_while(|&&c| c != SENTINEL)
        .fold(I::ZERO, |h, &c| h.step(c))
}

/// Length of the prefix of `buf` before the first [`SENTINEL`].
#[must_use]
pub fn sentinel_len(buf: &[u8]) -> usize {
    buf.iter().position(|&c| c == SENTINEL).unwrap_or(buf.len())
}
