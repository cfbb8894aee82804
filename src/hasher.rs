//! Hash function objects.
//!
//! - [`KeyHasher`]: zero-sized strategy value a table stores to hash its keys
//! - [`PolyHasher`]: the same recurrence behind [`std::hash::Hasher`], for
//!   `std::collections` tables
//!
//! The two do not agree on strings: `Hash for str` appends a `0xff`
//! terminator and `Hash for [T]` prefixes the length, both of which
//! [`PolyHasher`] folds in like any other write.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hasher};
use std::marker::PhantomData;

use crate::key::KeyHash;
use crate::word::HashWord;

/// Function object hashing keys of type `K` to codes of width `I`.
///
/// Stateless: every instance computes the same function.
pub struct KeyHasher<K: ?Sized, I> {
    _marker: PhantomData<fn(&K) -> I>,
}

impl<K: ?Sized, I> KeyHasher<K, I> {
    /// Creates the hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K: KeyHash + ?Sized, I: HashWord> KeyHasher<K, I> {
    /// Hashes `key`.
    #[must_use]
    pub fn hash(&self, key: &K) -> I {
        key.key_hash()
    }
}

// Manual impls: derives would bound `K` and `I`.

impl<K: ?Sized, I> Clone for KeyHasher<K, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized, I> Copy for KeyHasher<K, I> {}

impl<K: ?Sized, I> Default for KeyHasher<K, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized, I> fmt::Debug for KeyHasher<K, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHasher")
            .field("key", &std::any::type_name::<K>())
            .field("word", &std::any::type_name::<I>())
            .finish()
    }
}

/// Streaming [`Hasher`] running the polynomial recurrence in width `I`.
///
/// Byte writes fold each byte. Integer writes fold the integer, coerced to
/// `I`, as a single term, so a hasher fed one integer finishes with that
/// integer's [`KeyHash`] code.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct PolyHasher<I> {
    state: I,
}

impl<I: HashWord> PolyHasher<I> {
    /// Creates a hasher in the empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: I::ZERO }
    }

    /// The full-width code accumulated so far.
    #[must_use]
    pub const fn code(&self) -> I {
        self.state
    }

    #[inline]
    fn fold_key<K: KeyHash>(&mut self, key: &K) {
        self.state = self.state.fold(key.key_hash());
    }
}

impl<I: HashWord> fmt::Debug for PolyHasher<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyHasher")
            .field("state", &self.state)
            .finish()
    }
}

impl<I: HashWord> Hasher for PolyHasher<I> {
    fn finish(&self) -> u64 {
        self.state.widen()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = bytes.iter().fold(self.state, |h, &c| h.step(c));
    }

    fn write_u8(&mut self, i: u8) {
        self.fold_key(&i);
    }

    fn write_u16(&mut self, i: u16) {
        self.fold_key(&i);
    }

    fn write_u32(&mut self, i: u32) {
        self.fold_key(&i);
    }

    fn write_u64(&mut self, i: u64) {
        self.fold_key(&i);
    }

    fn write_u128(&mut self, i: u128) {
        self.fold_key(&i);
    }

    fn write_usize(&mut self, i: usize) {
        self.fold_key(&i);
    }

    fn write_i8(&mut self, i: i8) {
        self.fold_key(&i);
    }

    fn write_i16(&mut self, i: i16) {
        self.fold_key(&i);
    }

    fn write_i32(&mut self, i: i32) {
        self.fold_key(&i);
    }

    fn write_i64(&mut self, i: i64) {
        self.fold_key(&i);
    }

    fn write_i128(&mut self, i: i128) {
        self.fold_key(&i);
    }

    fn write_isize(&mut self, i: isize) {
        self.fold_key(&i);
    }
}

/// [`BuildHasher`] producing [`PolyHasher`]s.
pub struct BuildPolyHasher<I> {
    _marker: PhantomData<fn() -> I>,
}

impl<I> BuildPolyHasher<I> {
    /// Creates the builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<I> Clone for BuildPolyHasher<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for BuildPolyHasher<I> {}

impl<I> Default for BuildPolyHasher<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for BuildPolyHasher<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildPolyHasher")
            .field("word", &std::any::type_name::<I>())
            .finish()
    }
}

impl<I: HashWord> BuildHasher for BuildPolyHasher<I> {
    type Hasher = PolyHasher<I>;

    fn build_hasher(&self) -> PolyHasher<I> {
        PolyHasher::new()
    }
}

/// [`HashMap`] hashing keys with [`PolyHasher<u64>`].
pub type PolyHashMap<K, V> = HashMap<K, V, BuildPolyHasher<u64>>;

/// [`HashSet`] hashing keys with [`PolyHasher<u64>`].
pub type PolyHashSet<K> = HashSet<K, BuildPolyHasher<u64>>;
