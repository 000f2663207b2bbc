// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index invariants.
//!
//! Debug-build assertions that the sorted snapshot, the match ranges and the
//! weight ordering are what the index claims they are. They compile to nothing
//! in release builds (`debug_assert!`), so the index calls them on every
//! construction and query.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                         |
//! |----------------------------|--------------------------------------------------|
//! | `check_naturally_sorted`   | `terms[i].query <= terms[i+1].query`             |
//! | `check_match_range`        | range is exactly the terms with that prefix      |
//! | `check_weight_descending`  | `matches[i].weight >= matches[i+1].weight`       |

use std::ops::RangeInclusive;

use crate::types::Term;

/// Check that the snapshot is sorted by natural order.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair out of order.
#[inline]
pub fn check_naturally_sorted(terms: &[Term]) {
    // INVARIANT: naturally sorted snapshot
    debug_assert!(
        terms.windows(2).all(|w| w[0].query() <= w[1].query()),
        "Contract violation: terms not in natural order at position {}",
        terms
            .windows(2)
            .position(|w| w[0].query() > w[1].query())
            .map_or(0, |i| i + 1)
    );
}

/// Check that `range` is a maximal run of terms starting with `prefix`.
///
/// Only the two boundaries and their outside neighbours are inspected; the
/// interior follows from sortedness.
///
/// # Panics (debug builds only)
/// Panics if a boundary term does not start with `prefix`, or if a neighbour
/// just outside the range does.
#[inline]
pub fn check_match_range(terms: &[Term], prefix: &str, range: &RangeInclusive<usize>) {
    let (first, last) = (*range.start(), *range.end());

    // INVARIANT: match range in bounds
    debug_assert!(
        first <= last && last < terms.len(),
        "Contract violation: match range {}..={} outside 0..{}",
        first,
        last,
        terms.len()
    );

    // INVARIANT: range boundaries match the prefix
    debug_assert!(
        terms[first].query().starts_with(prefix) && terms[last].query().starts_with(prefix),
        "Contract violation: boundary of {}..={} does not start with '{}'",
        first,
        last,
        prefix
    );

    // INVARIANT: range is maximal
    debug_assert!(
        first == 0 || !terms[first - 1].query().starts_with(prefix),
        "Contract violation: term {} before range also starts with '{}'",
        first - 1,
        prefix
    );
    debug_assert!(
        last + 1 == terms.len() || !terms[last + 1].query().starts_with(prefix),
        "Contract violation: term {} after range also starts with '{}'",
        last + 1,
        prefix
    );
}

/// Check that matches are ordered heaviest first.
///
/// # Panics (debug builds only)
/// Panics if a lighter term precedes a heavier one.
#[inline]
pub fn check_weight_descending(matches: &[Term]) {
    // INVARIANT: weight descending
    debug_assert!(
        matches.windows(2).all(|w| w[0].weight() >= w[1].weight()),
        "Contract violation: matches not in descending weight order"
    );
}
