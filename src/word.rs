//! Hash code widths.
//!
//! A [`HashWord`] is the unsigned integer a hash code is produced in. All
//! arithmetic on it wraps at the word width, so every intermediate value of
//! the string recurrence is already reduced modulo `2^BITS`.

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer type a hash code can be computed in.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`. Sealed:
/// the recurrence relies on wrapping arithmetic of exactly these types.
pub trait HashWord:
    sealed::Sealed + Copy + Eq + Ord + Hash + Default + fmt::Debug + Send + Sync + 'static
{
    /// The zero code (hash of the empty string).
    const ZERO: Self;

    /// Width in bits.
    const BITS: u32;

    /// One step of the string recurrence: `(self << 7) - self + byte`.
    #[must_use]
    fn step(self, byte: u8) -> Self;

    /// Same recurrence, adding a full word instead of a byte.
    #[must_use]
    fn fold(self, word: Self) -> Self;

    /// Two's-complement truncation of `value` to this width.
    #[must_use]
    fn truncate(value: u128) -> Self;

    /// Float-to-integer conversion: truncates toward zero, saturates at the
    /// bounds, maps NaN to zero.
    #[must_use]
    fn saturate(value: f64) -> Self;

    /// Zero-extends (or, for `u128`, truncates) the code to 64 bits.
    #[must_use]
    fn widen(self) -> u64;
}

macro_rules! hash_word {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_lossless,
            clippy::unnecessary_cast,
            clippy::useless_conversion
        )]
        impl HashWord for $ty {
            const ZERO: Self = 0;
            const BITS: u32 = <$ty>::BITS;

            #[inline]
            fn step(self, byte: u8) -> Self {
                self.fold(Self::from(byte))
            }

            #[inline]
            fn fold(self, word: Self) -> Self {
                self.wrapping_shl(7).wrapping_sub(self).wrapping_add(word)
            }

            #[inline]
            fn truncate(value: u128) -> Self {
                value as Self
            }

            #[inline]
            fn saturate(value: f64) -> Self {
                value as Self
            }

            #[inline]
            fn widen(self) -> u64 {
                self as u64
            }
        }
    )*};
}

hash_word!(u8, u16, u32, u64, u128, usize);
