//! Key hashing strategies.
//!
//! A table hashes keys through a `KeyHash` value chosen at construction.
//! Strategies are pure: equal keys always hash equal, and the choice only
//! affects how evenly keys spread across buckets.

/// String-to-integer hashing strategy used for bucket placement.
pub trait KeyHash {
    fn hash_key(&self, key: &str) -> u64;
}

/// Any `Fn(&str) -> u64` is a strategy, which keeps stub hashes in tests short.
impl<F> KeyHash for F
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

/// DJB2 over character codes, truncated to 32 bits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Djb2;

impl KeyHash for Djb2 {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        djb2(key)
    }
}

/// 64-bit FNV-1 over the UTF-8 bytes of the key.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Fnv1;

impl KeyHash for Fnv1 {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        fnv1(key)
    }
}

const DJB2_SEED: u32 = 5381;
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// `hash = hash * 33 + c` for every character `c`, mod 2^32.
pub fn djb2(key: &str) -> u64 {
    let hash = key.chars().fold(DJB2_SEED, |hash, c| {
        hash.wrapping_mul(33).wrapping_add(c as u32)
    });
    u64::from(hash)
}

/// FNV-1 (multiply, then xor) with the standard 64-bit parameters.
pub fn fnv1(key: &str) -> u64 {
    key.bytes().fold(FNV_OFFSET_BASIS, |hash, b| {
        hash.wrapping_mul(FNV_PRIME) ^ u64::from(b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn djb2_known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 177_670);
        assert_eq!(djb2("car"), 193_488_123);
        assert_eq!(djb2("rae"), 193_504_445);
        // Overflows 32 bits before masking.
        assert_eq!(djb2("Toyota"), 3_555_539_685);
    }

    /// Non-ASCII keys hash by character code, not by UTF-8 byte.
    #[test]
    fn djb2_uses_character_codes() {
        assert_eq!(djb2("héllo"), 265_982_621);
    }

    #[test]
    fn djb2_fits_in_32_bits() {
        for k in ["", "x", "a much longer key that overflows many times", "line_12"] {
            assert!(djb2(k) <= u64::from(u32::MAX));
        }
    }

    #[test]
    fn fnv1_known_values() {
        assert_eq!(fnv1(""), FNV_OFFSET_BASIS);
        assert_eq!(fnv1("a"), 0xaf63_bd4c_8601_b7be);
        assert_eq!(fnv1("car"), 0xd8d5_c118_6ba9_7fdd);
        assert_eq!(fnv1("héllo"), 0x8eae_831c_980c_131e);
    }

    #[test]
    fn strategies_match_free_functions() {
        for k in ["Toyota", "Honda", "Porsche", ""] {
            assert_eq!(Djb2.hash_key(k), djb2(k));
            assert_eq!(Fnv1.hash_key(k), fnv1(k));
        }
    }

    #[test]
    fn closures_are_strategies() {
        let constant = |_: &str| 7u64;
        assert_eq!(constant.hash_key("anything"), 7);
        let by_len = |k: &str| k.len() as u64;
        assert_eq!(by_len.hash_key("four"), 4);
    }
}
