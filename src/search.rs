//! Binary search over sorted id arrays
//!
//! Thin glue over the slice primitives in `core`; both functions assume the
//! searched range is sorted ascending and are otherwise unchecked.

/// Exact-match search of `key` within `sorted[lo..hi]`
///
/// Returns the absolute position of a matching entry, or `None`. With
/// duplicate keys any one of the matching positions may be returned.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi > sorted.len()`.
#[inline]
#[must_use]
pub fn exact_match<T: Ord>(sorted: &[T], key: &T, lo: usize, hi: usize) -> Option<usize> {
    sorted[lo..hi].binary_search(key).ok().map(|i| lo + i)
}

/// Position of the first entry strictly greater than `key`
///
/// Returns `sorted.len()` when every entry is `<= key`.
#[inline]
#[must_use]
pub fn upper_bound<T: Ord>(sorted: &[T], key: &T) -> usize {
    sorted.partition_point(|x| x <= key)
}
