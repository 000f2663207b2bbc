// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three orders the index is built on.
//!
//! - **Natural order** sorts the vocabulary once, at construction.
//! - **Prefix order** is natural order squinted at through an `r`-character
//!   window. A term compares equal to a query of length `r` exactly when its
//!   first `r` characters are the query, which turns "find every term with this
//!   prefix" into "find the run of equal elements".
//! - **Reverse weight order** sorts the matches for presentation.
//!
//! # Consistency
//!
//! Prefix order walks `char`s, and `str`'s `Ord` compares UTF-8 bytes. The two
//! agree because UTF-8 byte order is code point order. That agreement is what
//! makes the prefix matches a contiguous run in a naturally sorted slice; if
//! either side ever switches to a different collation, the other has to follow.

use std::cmp::Ordering;

use crate::types::{InvalidArgument, Term};

/// Lexicographic order on the query text. Weight is ignored.
#[inline]
pub fn natural_order(a: &Term, b: &Term) -> Ordering {
    a.query().cmp(b.query())
}

/// Descending by weight. Equal weights compare equal, so the sort applied on
/// top decides how ties end up.
#[inline]
pub fn reverse_weight_order(a: &Term, b: &Term) -> Ordering {
    b.weight().cmp(&a.weight())
}

/// Lexicographic order restricted to the first `r` characters.
///
/// When both strings have at least `r` characters, only those `r` count. When
/// the window is cut short by a string ending, the shorter string sorts first
/// and equal lengths are equal.
///
/// ```
/// use autocomplete::PrefixOrder;
/// use std::cmp::Ordering;
///
/// let by3 = PrefixOrder::new(3);
/// assert_eq!(by3.compare("dog", "dogcatcher"), Ordering::Equal);
/// assert_eq!(by3.compare("do", "dog"), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixOrder {
    length: usize,
}

impl PrefixOrder {
    /// Compare through a window of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Window size in characters.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Compare two strings under this order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let mut a_chars = a.chars();
        let mut b_chars = b.chars();

        for _ in 0..self.length {
            match (a_chars.next(), b_chars.next()) {
                (Some(x), Some(y)) => match x.cmp(&y) {
                    Ordering::Equal => {}
                    unequal => return unequal,
                },
                // Window capped by length: shorter first
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
            }
        }

        Ordering::Equal
    }

    /// Compare two terms by their queries.
    #[inline]
    pub fn compare_terms(&self, a: &Term, b: &Term) -> Ordering {
        self.compare(a.query(), b.query())
    }
}

impl TryFrom<i64> for PrefixOrder {
    type Error = InvalidArgument;

    fn try_from(length: i64) -> Result<Self, Self::Error> {
        usize::try_from(length)
            .map(PrefixOrder::new)
            .map_err(|_| InvalidArgument::NegativePrefixLength { length })
    }
}
