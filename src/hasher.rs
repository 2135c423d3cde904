//! ## 128-bit hashers
//! Every value inserted into `HyperLogLog` is reduced to a uniformly distributed `u128`.
//! The low bits select a register and the remaining high bits define the rank.
//!
//! Two implementations are provided:
//! - `Md5Hasher` (default): MD5 digest interpreted as a big-endian `u128`. MD5 is used
//!   only for its output distribution, not as a security primitive.
//! - `WyHasher128`: two independently seeded 64-bit wyhash passes. Noticeably faster,
//!   produces different (but equally distributed) estimates.

use wyhash::wyhash;

/// Deterministic hash of a byte sequence into 128 bits.
///
/// Implementations must return the same value for the same input across runs and processes.
pub trait Hasher128: Default {
    fn hash128(&self, bytes: &[u8]) -> u128;
}

/// MD5 based hasher
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Md5Hasher;

impl Hasher128 for Md5Hasher {
    #[inline]
    fn hash128(&self, bytes: &[u8]) -> u128 {
        u128::from_be_bytes(md5::compute(bytes).0)
    }
}

/// Seed used for the high 64 bits of `WyHasher128` output
const WY_SEED_HI: u64 = 0x243f_6a88_85a3_08d3;
/// Seed used for the low 64 bits of `WyHasher128` output
const WY_SEED_LO: u64 = 0x1319_8a2e_0370_7344;

/// wyhash based hasher
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WyHasher128;

impl Hasher128 for WyHasher128 {
    #[inline]
    fn hash128(&self, bytes: &[u8]) -> u128 {
        let hi = wyhash(bytes, WY_SEED_HI);
        let lo = wyhash(bytes, WY_SEED_LO);
        (u128::from(hi) << 64) | u128::from(lo)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"" => 0xd41d8cd98f00b204e9800998ecf8427e; "empty input")]
    #[test_case(b"a" => 0x0cc175b9c0f1b6a831c399e269772661; "single byte")]
    #[test_case(b"abc" => 0x900150983cd24fb0d6963f7d28e17f72; "three bytes")]
    fn test_md5_hasher(input: &[u8]) -> u128 {
        Md5Hasher.hash128(input)
    }

    #[test]
    fn test_wyhasher_deterministic() {
        let h1 = WyHasher128.hash128(b"item-42");
        let h2 = WyHasher128::default().hash128(b"item-42");
        assert_eq!(h1, h2);
        assert_ne!(h1, WyHasher128.hash128(b"item-43"));
    }

    #[test]
    fn test_wyhasher_halves_differ() {
        // independent seeds must not produce identical 64-bit halves
        for i in 0..100 {
            let h = WyHasher128.hash128(format!("item-{}", i).as_bytes());
            assert_ne!((h >> 64) as u64, h as u64);
        }
    }
}
