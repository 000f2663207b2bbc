// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The unit of the vocabulary: a query string with a non-negative weight.
//!
//! A `Term` is created by the host before the index is built and never changes
//! afterwards. The fields are private so nothing downstream can reweight an
//! entry that already sits inside a sorted index.
//!
//! # Invariants
//!
//! - **Term**: `weight ≥ 0`. The weight is a `u64`, so the type carries the
//!   invariant. Hosts that hold signed weights go through
//!   `Term::try_new`, which is where a negative value is
//!   rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ERRORS
// =============================================================================

/// Error type for arguments the core refuses to work with.
///
/// Every operation either succeeds completely or fails with one of these before
/// anything observable changes. There is nothing to roll back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A term was given a weight below zero.
    ///
    /// `position` is the entry's index in the input sequence when the term was
    /// built as part of a batch, `None` for a standalone conversion.
    NegativeWeight { position: Option<usize>, weight: i64 },
    /// A prefix comparator was requested with a window below zero characters.
    NegativePrefixLength { length: i64 },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NegativeWeight {
                position: Some(position),
                weight,
            } => {
                write!(f, "term {} has negative weight {}", position, weight)
            }
            InvalidArgument::NegativeWeight {
                position: None,
                weight,
            } => {
                write!(f, "negative weight {}", weight)
            }
            InvalidArgument::NegativePrefixLength { length } => {
                write!(f, "prefix length {} < 0", length)
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}

// =============================================================================
// TERM
// =============================================================================

/// A word or phrase together with how often it is searched for.
///
/// Renders as `"<weight>\t<query>"`, which is also the line format of the term
/// files the loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    query: String,
    weight: u64,
}

impl Term {
    /// Create a term. Infallible: an unsigned weight cannot be negative.
    pub fn new(query: impl Into<String>, weight: u64) -> Self {
        Self {
            query: query.into(),
            weight,
        }
    }

    /// The word or phrase.
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// How heavily this term ranks in results.
    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Create a term from a signed weight, rejecting negative values.
    pub fn try_new(query: impl Into<String>, weight: i64) -> Result<Self, InvalidArgument> {
        let weight = u64::try_from(weight).map_err(|_| InvalidArgument::NegativeWeight {
            position: None,
            weight,
        })?;
        Ok(Term::new(query, weight))
    }

    /// Length of the query in characters (Unicode scalar values).
    pub fn char_len(&self) -> usize {
        self.query.chars().count()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.weight, self.query)
    }
}
