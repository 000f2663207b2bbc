//! Property tests for the autocomplete index against a linear-scan oracle.

use crate::common::{assert_matches_oracle, oracle_matches, prefix_strategy, vocabulary_strategy};
use autocomplete::Autocomplete;
use proptest::prelude::*;

proptest! {
    /// Property: matches are exactly the terms with the prefix, heaviest first
    #[test]
    fn prop_all_matches_equals_oracle(vocab in vocabulary_strategy(), prefix in prefix_strategy()) {
        let index = Autocomplete::new(&vocab);
        assert_matches_oracle(&index, &vocab, &prefix);
    }

    /// Property: count agrees with the match list and the oracle
    #[test]
    fn prop_count_consistent(vocab in vocabulary_strategy(), prefix in prefix_strategy()) {
        let index = Autocomplete::new(&vocab);
        let count = index.count_matches(&prefix);
        prop_assert_eq!(count, index.all_matches(&prefix).len());
        prop_assert_eq!(count, oracle_matches(&vocab, &prefix).len());
    }

    /// Property: weights never increase along a result
    #[test]
    fn prop_weight_descending(vocab in vocabulary_strategy(), prefix in prefix_strategy()) {
        let index = Autocomplete::new(&vocab);
        let matches = index.all_matches(&prefix);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].weight() >= pair[1].weight());
        }
    }

    /// Property: equal weights come out in natural order
    #[test]
    fn prop_ties_in_natural_order(vocab in vocabulary_strategy(), prefix in prefix_strategy()) {
        let index = Autocomplete::new(&vocab);
        let matches = index.all_matches(&prefix);
        for pair in matches.windows(2) {
            if pair[0].weight() == pair[1].weight() {
                prop_assert!(pair[0].query() <= pair[1].query());
            }
        }
    }

    /// Property: the empty prefix returns the whole vocabulary
    #[test]
    fn prop_empty_prefix_matches_all(vocab in vocabulary_strategy()) {
        let index = Autocomplete::new(&vocab);
        prop_assert_eq!(index.count_matches(""), vocab.len());
    }

    /// Property: repeated queries are identical
    #[test]
    fn prop_idempotent(vocab in vocabulary_strategy(), prefix in prefix_strategy()) {
        let index = Autocomplete::new(&vocab);
        let first = index.all_matches(&prefix);
        let second = index.all_matches(&prefix);
        prop_assert_eq!(first, second);
        prop_assert_eq!(index.count_matches(&prefix), index.count_matches(&prefix));
    }

    /// Property: top_matches is a prefix of all_matches
    #[test]
    fn prop_top_is_prefix_of_all(vocab in vocabulary_strategy(), prefix in prefix_strategy(), k in 0usize..10) {
        let index = Autocomplete::new(&vocab);
        let all = index.all_matches(&prefix);
        let top = index.top_matches(&prefix, k);
        prop_assert_eq!(top.len(), k.min(all.len()));
        prop_assert_eq!(&all[..top.len()], top.as_slice());
    }
}
