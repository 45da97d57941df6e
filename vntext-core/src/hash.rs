//! Deterministic string fingerprints.
//!
//! FNV-1a over the UTF-8 bytes of the string. The function is fixed and
//! unseeded, so fingerprints are identical across calls, runs, processes and
//! machines, and can be stored for later deduplication. It is not
//! collision-resistant against an adversary.

use vntext_types::Fingerprint;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes `text` to a 64-bit fingerprint.
///
/// ```
/// use vntext_core::hash::fingerprint;
///
/// assert_eq!(fingerprint("").as_u64(), 0xcbf29ce484222325);
/// assert_eq!(fingerprint("a"), fingerprint("a"));
/// assert_ne!(fingerprint("ab"), fingerprint("ba"));
/// ```
#[inline]
pub fn fingerprint(text: &str) -> Fingerprint {
    Fingerprint(fnv1a(text.as_bytes()))
}

/// Raw FNV-1a 64 over a byte slice.
#[inline]
pub const fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}
