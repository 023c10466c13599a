//! Content hashing for change detection.
//!
//! Uses `rustc_hash::FxHasher`: fast and deterministic, which is all a
//! "did the declaration file change" check needs.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}
