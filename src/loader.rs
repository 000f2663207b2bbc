// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading vocabularies from disk.
//!
//! Two formats. The text format is a count followed by one term per line:
//!
//! ```text
//! 3
//!     14608512	Shanghai, China
//!     13076300	Buenos Aires, Argentina
//!      3730206	Melbourne, Victoria, Australia
//! ```
//!
//! Whitespace before the weight is skipped. The query is everything after the
//! first tab, kept verbatim (inner spaces, commas and trailing text included).
//! Blank lines are skipped and lines beyond the declared count are ignored.
//!
//! The JSON format is an array of `{"query": ..., "weight": ...}` objects and is
//! selected by a `.json` extension.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::types::{InvalidArgument, Term};

/// Why a term list could not be read.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The input has no count line.
    MissingCount,
    /// The count line is not a non-negative integer.
    InvalidCount { found: String },
    /// A term line could not be parsed. `line` is 1-based.
    MalformedLine { line: usize, reason: &'static str },
    /// Fewer term lines than the count line promised.
    CountMismatch { declared: usize, found: usize },
    /// The JSON term list is malformed.
    Json(serde_json::Error),
    /// A parsed term violates a term invariant.
    Term { line: usize, source: InvalidArgument },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(_) => write!(f, "failed to read term list"),
            LoadError::MissingCount => write!(f, "term list is empty (expected a count line)"),
            LoadError::InvalidCount { found } => {
                write!(f, "invalid term count '{}'", found)
            }
            LoadError::MalformedLine { line, reason } => {
                write!(f, "line {}: {}", line, reason)
            }
            LoadError::CountMismatch { declared, found } => {
                write!(f, "declared {} terms but found {}", declared, found)
            }
            LoadError::Json(_) => write!(f, "invalid JSON term list"),
            LoadError::Term { line, .. } => write!(f, "line {}: invalid term", line),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            LoadError::Term { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

/// Read a term list, choosing the format from the file extension.
pub fn read_terms(path: &Path) -> Result<Vec<Term>, LoadError> {
    let raw = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let terms = if is_json {
        parse_json_terms(&raw)?
    } else {
        parse_terms(&raw)?
    };

    log::info!("loaded {} terms from {}", terms.len(), path.display());
    Ok(terms)
}

/// Parse the count-prefixed text format.
pub fn parse_terms(raw: &str) -> Result<Vec<Term>, LoadError> {
    let mut lines = raw.lines().enumerate();

    let count_line = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(_, line)| line.trim())
        .ok_or(LoadError::MissingCount)?;
    let declared: usize = count_line.parse().map_err(|_| LoadError::InvalidCount {
        found: count_line.to_string(),
    })?;

    // Each term needs at least two bytes, so the input bounds the allocation
    let mut terms = Vec::with_capacity(declared.min(raw.len() / 2));
    for (idx, line) in lines {
        if terms.len() == declared {
            log::debug!("ignoring lines after the declared {} terms", declared);
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        terms.push(parse_term_line(line, idx + 1)?);
    }

    if terms.len() < declared {
        return Err(LoadError::CountMismatch {
            declared,
            found: terms.len(),
        });
    }

    Ok(terms)
}

/// Parse a JSON array of terms.
pub fn parse_json_terms(raw: &str) -> Result<Vec<Term>, LoadError> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_term_line(line: &str, line_no: usize) -> Result<Term, LoadError> {
    let (weight, query) = line
        .trim_start()
        .split_once('\t')
        .ok_or(LoadError::MalformedLine {
            line: line_no,
            reason: "expected '<weight>\\t<query>'",
        })?;

    let weight: i64 = weight.trim_end().parse().map_err(|_| LoadError::MalformedLine {
        line: line_no,
        reason: "weight is not an integer",
    })?;

    Term::try_new(query, weight).map_err(|source| LoadError::Term {
        line: line_no,
        source,
    })
}
