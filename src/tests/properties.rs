use std::ffi::CString;

use proptest::prelude::*;

use crate::poly::{hash_bytes, hash_c_bytes, sentinel_len};
use crate::{KeyHash, StaticString};

/// Unreduced reference in 128 bits; reducing once at the end is equivalent to
/// reducing at every step for any width that divides 2^128.
fn reference(bytes: &[u8]) -> u128 {
    bytes
        .iter()
        .fold(0_u128, |h, &c| h.wrapping_mul(127).wrapping_add(u128::from(c)))
}

fn non_nul_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1_u8..=u8::MAX, 0..=48)
}

proptest! {
    #[test]
    fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
        prop_assert_eq!(hash_bytes::<u64>(&data), hash_bytes::<u64>(&data));
        prop_assert_eq!(hash_c_bytes::<u32>(&data), hash_c_bytes::<u32>(&data));
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
        let wide = reference(&data);
        prop_assert_eq!(hash_bytes::<u8>(&data), wide as u8);
        prop_assert_eq!(hash_bytes::<u16>(&data), wide as u16);
        prop_assert_eq!(hash_bytes::<u32>(&data), wide as u32);
        prop_assert_eq!(hash_bytes::<u64>(&data), wide as u64);
        prop_assert_eq!(hash_bytes::<u128>(&data), wide);
    }

    #[test]
    fn representations_agree(data in non_nul_bytes()) {
        let fixed: StaticString<48> = StaticString::try_from(data.as_slice()).unwrap();
        let c = CString::new(data.clone()).unwrap();
        prop_assert_eq!(fixed.key_hash::<u32>(), c.key_hash::<u32>());
        prop_assert_eq!(fixed.key_hash::<u64>(), c.as_c_str().key_hash::<u64>());
        prop_assert_eq!(fixed.key_hash::<u16>(), data.as_slice().key_hash::<u16>());
    }

    #[test]
    fn utf8_representations_agree(s in "[^\\x00]{0,16}") {
        let fixed: StaticString<64> = StaticString::try_from(s.as_str()).unwrap();
        prop_assert_eq!(fixed.key_hash::<u64>(), s.key_hash::<u64>());
        prop_assert_eq!(s.as_str().key_hash::<u32>(), s.key_hash::<u32>());
    }

    /// Bytes after the first sentinel never change the code.
    #[test]
    fn tail_after_sentinel_ignored(
        head in non_nul_bytes(),
        tail in proptest::collection::vec(any::<u8>(), 0..=32),
    ) {
        let mut buf = head.clone();
        buf.push(0);
        buf.extend_from_slice(&tail);
        prop_assert_eq!(sentinel_len(&buf), head.len());
        prop_assert_eq!(hash_c_bytes::<u64>(&buf), hash_bytes::<u64>(&head));
    }

    #[test]
    fn integer_coercion(k in any::<u64>()) {
        prop_assert_eq!(k.key_hash::<u64>(), k);
        prop_assert_eq!(u64::from(k.key_hash::<u32>()), k & u64::from(u32::MAX));
        prop_assert_eq!(k.key_hash::<u128>(), u128::from(k));
    }
}
