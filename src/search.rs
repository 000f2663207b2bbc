// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boundary binary search: the first and last index of a run of equal elements.
//!
//! `slice::binary_search_by` returns *some* match. Autocomplete needs the whole
//! run, so both searches keep going after a hit: the first-index search records
//! the candidate and narrows to the lower half, the last-index search narrows to
//! the upper half. Each stays at O(log n) comparisons.
//!
//! The comparator takes the key on the left and an element on the right, and
//! the key does not have to be the element type. The index searches a slice of
//! `Term` with a bare `&str` prefix.
//!
//! # Precondition
//!
//! The slice must be sorted consistently with `cmp` for the given key: every
//! element comparing `Greater` to the key precedes every `Equal` element, which
//! precede every `Less` element. This is not checked.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// Index of the first element equal to `key` under `cmp`, or `None`.
///
/// ```
/// use autocomplete::first_index_of;
///
/// let a = ["A", "A", "C", "G", "G", "T"];
/// assert_eq!(first_index_of(&a, "G", |k: &str, e: &&str| k.cmp(e)), Some(3));
/// ```
pub fn first_index_of<T, K, F>(sorted: &[T], key: &K, mut cmp: F) -> Option<usize>
where
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    let mut lo = 0usize;
    let mut hi = sorted.len();
    let mut found = None;

    // Half-open [lo, hi) so `hi` never underflows at index 0
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(key, &sorted[mid]) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => {
                // Leftmost so far; keep looking below
                found = Some(mid);
                hi = mid;
            }
        }
    }

    found
}

/// Index of the last element equal to `key` under `cmp`, or `None`.
pub fn last_index_of<T, K, F>(sorted: &[T], key: &K, mut cmp: F) -> Option<usize>
where
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    let mut lo = 0usize;
    let mut hi = sorted.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(key, &sorted[mid]) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => {
                // Rightmost so far; keep looking above
                found = Some(mid);
                lo = mid + 1;
            }
        }
    }

    found
}

/// Both boundaries at once: `first..=last`, or `None` when nothing matches.
///
/// The last-index search only runs when the first one found something.
pub fn equal_range<T, K, F>(sorted: &[T], key: &K, mut cmp: F) -> Option<RangeInclusive<usize>>
where
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    let first = first_index_of(sorted, key, &mut cmp)?;
    let last = last_index_of(&sorted[first..], key, &mut cmp)? + first;
    Some(first..=last)
}
