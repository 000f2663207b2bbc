// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for prefix queries over arbitrary vocabularies.
//!
//! Builds an index from whatever terms the fuzzer invents, then checks every
//! query against a linear scan. Multi-byte characters, empty strings and
//! duplicate queries are exactly the inputs that break boundary searches.

#![no_main]

use arbitrary::Arbitrary;
use autocomplete::{Autocomplete, Term};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    terms: Vec<(String, u64)>,
    prefixes: Vec<String>,
}

fuzz_target!(|input: Input| {
    let vocab: Vec<Term> = input
        .terms
        .into_iter()
        .take(256)
        .map(|(q, w)| Term::new(q, w))
        .collect();
    let index = Autocomplete::new(&vocab);

    for prefix in input.prefixes.iter().take(16) {
        let expected = vocab
            .iter()
            .filter(|t| t.query().starts_with(prefix.as_str()))
            .count();

        // INVARIANT 1: count agrees with a linear scan
        assert_eq!(index.count_matches(prefix), expected, "prefix {:?}", prefix);

        // INVARIANT 2: all_matches has the same size and only true matches
        let matches = index.all_matches(prefix);
        assert_eq!(matches.len(), expected);
        assert!(matches.iter().all(|t| t.query().starts_with(prefix.as_str())));

        // INVARIANT 3: heaviest first
        assert!(matches.windows(2).all(|w| w[0].weight() >= w[1].weight()));
    }
});
