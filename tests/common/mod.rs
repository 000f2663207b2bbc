//! Shared test utilities and fixtures.

#![allow(dead_code)]

use autocomplete::{Autocomplete, Term};
use proptest::prelude::*;

// Re-export canonical fixtures from autocomplete::testing
pub use autocomplete::testing::{animals, cities, queries, to_term_file};

// ============================================================================
// ORACLES
// ============================================================================

/// Linear scan for every term starting with `prefix`, in input order.
///
/// O(n) but trivially correct.
pub fn oracle_matches<'a>(terms: &'a [Term], prefix: &str) -> Vec<&'a Term> {
    terms
        .iter()
        .filter(|t| t.query().starts_with(prefix))
        .collect()
}

/// Linear scan for the first index equal under `cmp`.
pub fn oracle_first<T, K: ?Sized>(
    seq: &[T],
    key: &K,
    cmp: impl Fn(&K, &T) -> std::cmp::Ordering,
) -> Option<usize> {
    seq.iter().position(|e| cmp(key, e).is_eq())
}

/// Linear scan for the last index equal under `cmp`.
pub fn oracle_last<T, K: ?Sized>(
    seq: &[T],
    key: &K,
    cmp: impl Fn(&K, &T) -> std::cmp::Ordering,
) -> Option<usize> {
    seq.iter().rposition(|e| cmp(key, e).is_eq())
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet so prefixes collide often.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,6}").unwrap()
}

/// Words that mix in multi-byte characters.
pub fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aé日b]{0,5}").unwrap()
}

pub fn term_strategy() -> impl Strategy<Value = Term> {
    (word_strategy(), 0u64..20).prop_map(|(q, w)| Term::new(q, w))
}

pub fn vocabulary_strategy() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(term_strategy(), 0..40)
}

pub fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,3}").unwrap()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert an `all_matches` result is exactly the oracle's matches, heaviest first.
pub fn assert_matches_oracle(index: &Autocomplete, source: &[Term], prefix: &str) {
    let got = index.all_matches(prefix);

    let mut expected: Vec<Term> = oracle_matches(source, prefix).into_iter().cloned().collect();
    expected.sort_by(|a, b| {
        b.weight()
            .cmp(&a.weight())
            .then_with(|| a.query().cmp(b.query()))
    });

    let mut got_sorted = got.clone();
    got_sorted.sort_by(|a, b| {
        b.weight()
            .cmp(&a.weight())
            .then_with(|| a.query().cmp(b.query()))
    });

    assert_eq!(got_sorted, expected, "wrong match set for prefix {:?}", prefix);
    assert!(
        got.windows(2).all(|w| w[0].weight() >= w[1].weight()),
        "matches for {:?} not heaviest first",
        prefix
    );
}
