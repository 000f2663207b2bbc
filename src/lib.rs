// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted prefix autocomplete over a sorted, in-memory vocabulary.
//!
//! Given a prefix, return every vocabulary term starting with it, heaviest
//! first, or just count them in O(log n). The vocabulary is fixed at
//! construction; there are no inserts or deletes afterwards.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   order.rs   │────▶│  search.rs   │
//! │   (Term,    │     │ (natural,    │     │ (first/last  │
//! │  errors)    │     │  prefix,     │     │  index_of)   │
//! └─────────────┘     │  by weight)  │     └──────────────┘
//!                     └──────────────┘             │
//!                            │                     ▼
//!                            │             ┌──────────────┐
//!                            └────────────▶│   index.rs   │
//!                                          │(Autocomplete)│
//!                                          └──────────────┘
//! ```
//!
//! `contracts` holds the debug-build invariant checks, `loader` reads term
//! files for the command-line host.
//!
//! # Usage
//!
//! ```
//! use autocomplete::{Autocomplete, Term};
//!
//! let index = Autocomplete::new(&[
//!     Term::new("dog", 1),
//!     Term::new("dogcatcher", 2),
//!     Term::new("cat", 3),
//!     Term::new("do", 4),
//! ]);
//!
//! assert_eq!(index.count_matches("do"), 3);
//! for term in index.all_matches("do") {
//!     println!("{}", term); // "4\tdo", "2\tdogcatcher", "1\tdog"
//! }
//! ```

pub mod contracts;
mod index;
pub mod loader;
mod order;
mod search;
mod types;

pub mod testing;

pub use index::Autocomplete;
pub use loader::{parse_json_terms, parse_terms, read_terms, LoadError};
pub use order::{natural_order, reverse_weight_order, PrefixOrder};
pub use search::{equal_range, first_index_of, last_index_of};
pub use types::{InvalidArgument, Term};
