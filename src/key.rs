//! Key types and their hash codes.
//!
//! [`KeyHash`] is implemented once per key type; the implementation picked
//! for a key is decided by its static type alone.
//!
//! | Key type | Code |
//! |----------|------|
//! | integers, `bool`, `char` | value coerced to the word width |
//! | `f32`, `f64` | truncated toward zero, saturating |
//! | [`StaticString`], `[u8]`, `[u8; N]` | polynomial hash of every byte |
//! | `str`, `String`, `CStr`, `CString` | polynomial hash up to the first NUL |
//!
//! There is no fallback for other types. A composite key type hashes only
//! after it implements [`KeyHash`] itself:
//!
//! ```
//! use keyhash::{HashWord, KeyHash};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl KeyHash for Point {
//!     fn key_hash<I: HashWord>(&self) -> I {
//!         self.x.key_hash::<I>().fold(self.y.key_hash())
//!     }
//! }
//!
//! let code: u32 = Point { x: 1, y: 2 }.key_hash();
//! assert_eq!(code, 127 + 2);
//! ```

use std::ffi::{CStr, CString};
use std::rc::Rc;
use std::sync::Arc;

use crate::poly;
use crate::static_string::StaticString;
use crate::word::HashWord;

/// A type that can be hashed to a code of any [`HashWord`] width.
pub trait KeyHash {
    /// Computes the hash code of `self` in the word type `I`.
    ///
    /// Same value and same `I` always give the same code.
    #[must_use]
    fn key_hash<I: HashWord>(&self) -> I;
}

/// Computes the hash code of `key` in the word type `I`.
///
/// ```
/// assert_eq!(keyhash::hash::<u16, _>("ab"), 97 * 127 + 98);
/// assert_eq!(keyhash::hash::<u8, _>(&0x1234_u32), 0x34);
/// ```
#[must_use]
pub fn hash<I: HashWord, K: KeyHash + ?Sized>(key: &K) -> I {
    key.key_hash()
}

// ---------------------------------------------------------------------------
// Scalars: numeric coercion
// ---------------------------------------------------------------------------

macro_rules! coerce_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl KeyHash for $ty {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn key_hash<I: HashWord>(&self) -> I {
                I::truncate(*self as u128)
            }
        }
    )*};
}

// Signed values sign-extend to 128 bits first, so `-1` becomes all ones at
// every width.
macro_rules! coerce_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl KeyHash for $ty {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::cast_sign_loss, clippy::unnecessary_cast)]
            fn key_hash<I: HashWord>(&self) -> I {
                I::truncate(*self as i128 as u128)
            }
        }
    )*};
}

coerce_unsigned!(u8, u16, u32, u64, u128, usize);
coerce_signed!(i8, i16, i32, i64, i128, isize);

impl KeyHash for bool {
    #[inline]
    fn key_hash<I: HashWord>(&self) -> I {
        I::truncate(u128::from(*self))
    }
}

impl KeyHash for char {
    #[inline]
    fn key_hash<I: HashWord>(&self) -> I {
        I::truncate(u128::from(*self))
    }
}

impl KeyHash for f32 {
    #[inline]
    fn key_hash<I: HashWord>(&self) -> I {
        I::saturate(f64::from(*self))
    }
}

impl KeyHash for f64 {
    #[inline]
    fn key_hash<I: HashWord>(&self) -> I {
        I::saturate(*self)
    }
}

// ---------------------------------------------------------------------------
// Length-delimited strings
// ---------------------------------------------------------------------------

impl<const N: usize> KeyHash for StaticString<N> {
    fn key_hash<I: HashWord>(&self) -> I {
        poly::hash_bytes(self.as_bytes())
    }
}

impl KeyHash for [u8] {
    fn key_hash<I: HashWord>(&self) -> I {
        poly::hash_bytes(self)
    }
}

impl<const N: usize> KeyHash for [u8; N] {
    fn key_hash<I: HashWord>(&self) -> I {
        poly::hash_bytes(self)
    }
}

// ---------------------------------------------------------------------------
// Sentinel-delimited strings
// ---------------------------------------------------------------------------

impl KeyHash for str {
    fn key_hash<I: HashWord>(&self) -> I {
        poly::hash_c_bytes(self.as_bytes())
    }
}

impl KeyHash for String {
    fn key_hash<I: HashWord>(&self) -> I {
        self.as_str().key_hash()
    }
}

impl KeyHash for CStr {
    fn key_hash<I: HashWord>(&self) -> I {
        poly::hash_c_bytes(self.to_bytes())
    }
}

impl KeyHash for CString {
    fn key_hash<I: HashWord>(&self) -> I {
        self.as_c_str().key_hash()
    }
}

// ---------------------------------------------------------------------------
// Pointers: hash the pointee
// ---------------------------------------------------------------------------

macro_rules! forward_pointer {
    ($($ptr:ty),* $(,)?) => {$(
        impl<T: KeyHash + ?Sized> KeyHash for $ptr {
            #[inline]
            fn key_hash<I: HashWord>(&self) -> I {
                (**self).key_hash()
            }
        }
    )*};
}

forward_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
