//! Hash codes for scalar and string keys, dispatched on key type.
//!
//! A key type picks its hashing strategy at compile time through the
//! [`KeyHash`] trait; the caller picks the code width through the
//! [`HashWord`] type parameter (`u8` to `u128`, or `usize`).
//!
//! # Strategies
//!
//! - **Scalars** (integers, `bool`, `char`, floats): the value coerced to the
//!   word width.
//! - **Strings**: the polynomial hash `h = 127·h + c` over the bytes, with
//!   wraparound at every step. [`StaticString`] and byte slices hash every
//!   byte; `str`, `String` and C strings stop at the first NUL.
//!
//! The empty string hashes to 0. Codes are deterministic and collisions are
//! expected: reducing a code to a bucket index, and resolving collisions, is
//! up to the table.
//!
//! ```
//! use keyhash::{KeyHash, KeyHasher, StaticString};
//!
//! let fixed: StaticString<16> = StaticString::try_from("hello").unwrap();
//! let code: u32 = fixed.key_hash();
//! assert_eq!(code, 0x590A_D1F2);
//! assert_eq!("hello".key_hash::<u32>(), code);
//!
//! let hasher = KeyHasher::<u64, u16>::new();
//! assert_eq!(hasher.hash(&0x0001_0002), 2);
//! ```
//!
//! # Key properties
//!
//! - **Compile-time dispatch**: one implementation per key type, no fallback
//! - **No allocation**: hashing only reads the key
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hasher;
pub mod key;
pub mod poly;
pub mod static_string;
pub mod word;

#[cfg(test)]
mod tests;

pub use error::CapacityError;
pub use hasher::{BuildPolyHasher, KeyHasher, PolyHashMap, PolyHashSet, PolyHasher};
pub use key::{KeyHash, hash};
pub use static_string::StaticString;
pub use word::HashWord;
