// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.
//!
//! Each command takes its input and output streams as parameters so the tests
//! can drive them with in-memory buffers.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use autocomplete::{Autocomplete, Term};

use super::display::{
    format_count, pad_left, pad_right, row, section_bot, section_mid, section_top, themed,
    truncate_chars, weight_share, BOLD, BRIGHT_CYAN, CYAN, GRAY,
};

/// One line of `query --json` output.
#[derive(Serialize)]
struct QueryReport<'a> {
    prefix: &'a str,
    count: usize,
    matches: &'a [Term],
}

/// Answer every prefix read from `input`.
///
/// Text mode prints `"<n> matches"` followed by at most `k` terms, one per
/// line, as `"<weight>\t<query>"`.
pub fn run_query<R: BufRead, W: Write>(
    index: &Autocomplete,
    k: usize,
    json: bool,
    input: R,
    mut out: W,
) -> Result<()> {
    for line in input.lines() {
        let prefix = line.context("failed to read prefix from stdin")?;
        let count = index.count_matches(&prefix);
        let matches = index.top_matches(&prefix, k);
        log::debug!("prefix {:?}: {} matches", prefix, count);

        if json {
            let report = QueryReport {
                prefix: &prefix,
                count,
                matches: &matches,
            };
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{} matches", count)?;
            for term in &matches {
                writeln!(out, "{}", term)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Print `"<count>\t<prefix>"` for each prefix.
pub fn run_count<W: Write>(index: &Autocomplete, prefixes: &[String], mut out: W) -> Result<()> {
    for prefix in prefixes {
        writeln!(out, "{}\t{}", index.count_matches(prefix), prefix)?;
    }
    Ok(())
}

/// Print a boxed summary of the vocabulary.
pub fn run_inspect(index: &Autocomplete, source: &str, top: usize) {
    let total = index.total_weight();

    section_top("VOCABULARY");
    row(&format!(" File:         {}", truncate_chars(source, 48)));
    row(&format!(
        " Terms:        {}",
        themed(BRIGHT_CYAN, &[BOLD], &format_count(index.len() as u64))
    ));
    row(&format!(" Total weight: {}", format_count(total)));
    if let Some(longest) = index.terms().iter().max_by_key(|t| t.char_len()) {
        row(&format!(
            " Longest:      {} ({} chars)",
            truncate_chars(longest.query(), 32),
            longest.char_len()
        ));
    }

    section_mid("HEAVIEST TERMS");
    let heaviest = index.top_matches("", top);
    if heaviest.is_empty() {
        row(&themed(GRAY, &[], " (empty)"));
    }
    for (rank, term) in heaviest.iter().enumerate() {
        row(&format!(
            " {} {} {} {}",
            pad_left(&(rank + 1).to_string(), 3),
            pad_right(&truncate_chars(term.query(), 36), 36),
            pad_left(&format_count(term.weight()), 14),
            weight_share(term.weight(), total)
        ));
    }

    section_mid("FIRST CHARACTERS");
    for (first, count) in first_char_counts(index).into_iter().take(top) {
        row(&format!(
            " {} {}",
            pad_right(&themed(CYAN, &[], &format!("{:?}", first)), 8),
            pad_left(&format_count(count as u64), 10)
        ));
    }
    section_bot();
}

/// Match counts for every distinct first character, most common first.
fn first_char_counts(index: &Autocomplete) -> Vec<(char, usize)> {
    let firsts: BTreeSet<char> = index
        .terms()
        .iter()
        .filter_map(|t| t.query().chars().next())
        .collect();

    let mut counts: Vec<(char, usize)> = firsts
        .into_iter()
        .map(|c| (c, index.count_matches(c.encode_utf8(&mut [0; 4]))))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
