// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The autocomplete index: a naturally sorted snapshot of the vocabulary.
//!
//! Construction copies the terms and sorts them once. A query then needs two
//! boundary searches under prefix order to find the matching run, one copy of
//! that run, and one sort of the copy by weight:
//!
//! | Operation        | Cost                  |
//! |------------------|-----------------------|
//! | construction     | O(n log n)            |
//! | `count_matches`  | O(log n)              |
//! | `all_matches`    | O(log n + k log k)    |
//!
//! where `k` is the number of matches.
//!
//! # Tie order
//!
//! Both sorts are stable. Terms with identical text keep their input order,
//! and equal-weight matches come out in natural order. Results are fully
//! reproducible for a given input sequence.

use std::ops::RangeInclusive;

use crate::contracts::{check_match_range, check_naturally_sorted, check_weight_descending};
use crate::order::{natural_order, reverse_weight_order, PrefixOrder};
use crate::search::equal_range;
use crate::types::{InvalidArgument, Term};

/// Prefix autocomplete over a fixed vocabulary.
///
/// ```
/// use autocomplete::{Autocomplete, Term};
///
/// let index = Autocomplete::new(&[
///     Term::new("dog", 1),
///     Term::new("dogcatcher", 2),
///     Term::new("cat", 3),
///     Term::new("do", 4),
/// ]);
///
/// assert_eq!(index.count_matches("do"), 3);
/// let top = index.all_matches("do");
/// assert_eq!(top[0].query(), "do");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    /// INVARIANT: sorted by `natural_order`.
    terms: Vec<Term>,
}

impl Autocomplete {
    /// Build an index from a copy of `terms`.
    ///
    /// The caller keeps its slice; nothing it does to it later reaches the index.
    pub fn new(terms: &[Term]) -> Self {
        Self::from_vec(terms.to_vec())
    }

    /// Build an index from `(query, weight)` pairs with signed weights.
    ///
    /// Fails on the first negative weight, reporting its position. Nothing is
    /// sorted until every pair has been validated.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let terms = pairs
            .into_iter()
            .enumerate()
            .map(|(position, (query, weight))| {
                Term::try_new(query, weight).map_err(|err| match err {
                    InvalidArgument::NegativeWeight { weight, .. } => {
                        InvalidArgument::NegativeWeight {
                            position: Some(position),
                            weight,
                        }
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_vec(terms))
    }

    fn from_vec(mut terms: Vec<Term>) -> Self {
        sort_naturally(&mut terms);
        check_naturally_sorted(&terms);
        Self { terms }
    }

    /// Number of terms in the vocabulary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The vocabulary in natural order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Sum of all weights, saturating at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.terms
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.weight()))
    }

    /// Positions in `terms()` of every term starting with `prefix`.
    ///
    /// The matches are contiguous because prefix order is a coarsening of
    /// natural order.
    pub fn match_range(&self, prefix: &str) -> Option<RangeInclusive<usize>> {
        let order = PrefixOrder::new(prefix.chars().count());
        let range = equal_range(&self.terms, prefix, |key: &str, term: &Term| {
            order.compare(key, term.query())
        })?;
        check_match_range(&self.terms, prefix, &range);
        Some(range)
    }

    /// How many terms start with `prefix`.
    pub fn count_matches(&self, prefix: &str) -> usize {
        self.match_range(prefix)
            .map_or(0, |range| range.end() - range.start() + 1)
    }

    /// Every term starting with `prefix`, heaviest first.
    ///
    /// The empty prefix matches the whole vocabulary.
    pub fn all_matches(&self, prefix: &str) -> Vec<Term> {
        let Some(range) = self.match_range(prefix) else {
            return Vec::new();
        };

        let mut matches = self.terms[range].to_vec();
        matches.sort_by(reverse_weight_order);
        check_weight_descending(&matches);
        matches
    }

    /// The `k` heaviest terms starting with `prefix`.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<Term> {
        let mut matches = self.all_matches(prefix);
        matches.truncate(k);
        matches
    }
}

impl FromIterator<Term> for Autocomplete {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(not(feature = "parallel"))]
fn sort_naturally(terms: &mut [Term]) {
    terms.sort_by(natural_order);
}

#[cfg(feature = "parallel")]
fn sort_naturally(terms: &mut [Term]) {
    use rayon::slice::ParallelSliceMut;
    terms.par_sort_by(natural_order);
}
