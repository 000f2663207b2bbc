// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the term-file parser.
//!
//! The parser should reject garbage with an error, never a panic, and
//! anything it accepts must index cleanly.

#![no_main]

use autocomplete::{parse_terms, Autocomplete};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(terms) = parse_terms(raw) {
        let index = Autocomplete::new(&terms);
        assert_eq!(index.len(), terms.len());
        assert_eq!(index.count_matches(""), terms.len());
    }
});
