//! # Utility Module
//!
//! Miscellaneous numeric helpers used throughout the generator.

/// Derives a child seed from `master` and a stream index (splitmix64 finaliser).
///
/// Stable across platforms and toolchains, unlike hashing with `DefaultHasher`.
pub fn derive_seed(master: u64, stream: u64) -> u64 {
    let mut z = master
        .wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
