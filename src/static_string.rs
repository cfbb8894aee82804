//! Fixed-capacity byte string.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops;
use std::str::{self, Utf8Error};

use crate::error::CapacityError;

/// Byte string stored inline in a `[u8; N]` buffer with a tracked length.
///
/// Bytes are not required to be UTF-8 and may include `0`: the length, not a
/// terminator, delimits the contents. Invariant: `len <= N`, and bytes past
/// `len` are zero.
#[derive(Clone, Copy)]
pub struct StaticString<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> StaticString<N> {
    /// Creates an empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    /// Maximum number of bytes the string can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Current length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the string holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes remaining before the string is full.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        N - self.len
    }

    /// The stored bytes, `0..len`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the byte at `pos`, or `None` past the end.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<u8> {
        self.as_bytes().get(pos).copied()
    }

    /// Views the contents as `str`.
    ///
    /// # Errors
    ///
    /// Returns [`Utf8Error`] if the bytes are not valid UTF-8.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the string is full; the string is left
    /// unchanged.
    pub fn push(&mut self, byte: u8) -> Result<(), CapacityError> {
        self.push_bytes(&[byte])
    }

    /// Appends the UTF-8 bytes of `s`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `s` does not fit; the string is left
    /// unchanged.
    pub fn push_str(&mut self, s: &str) -> Result<(), CapacityError> {
        self.push_bytes(s.as_bytes())
    }

    /// Appends `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `bytes` does not fit; the string is left
    /// unchanged.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        let required = self.len + bytes.len();
        if required > N {
            return Err(CapacityError {
                required,
                capacity: N,
            });
        }
        self.buf[self.len..required].copy_from_slice(bytes);
        self.len = required;
        Ok(())
    }

    /// Shortens the string to `len` bytes. No effect if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.buf[len..self.len].fill(0);
            self.len = len;
        }
    }

    /// Removes all bytes.
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

impl<const N: usize> Default for StaticString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<&[u8]> for StaticString<N> {
    type Error = CapacityError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let mut s = Self::new();
        s.push_bytes(bytes)?;
        Ok(s)
    }
}

impl<const N: usize> TryFrom<&str> for StaticString<N> {
    type Error = CapacityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.as_bytes())
    }
}

impl<const N: usize> ops::Deref for StaticString<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> ops::Index<usize> for StaticString<N> {
    type Output = u8;

    fn index(&self, pos: usize) -> &u8 {
        &self.as_bytes()[pos]
    }
}

impl<const N: usize> PartialEq for StaticString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for StaticString<N> {}

impl<const N: usize> Hash for StaticString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<const N: usize> fmt::Debug for StaticString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticString")
            .field("capacity", &N)
            .field("bytes", &format_args!("{}", self.as_bytes().escape_ascii()))
            .finish()
    }
}
