//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::Term;

/// The four-term vocabulary used throughout the tests.
///
/// Natural order: `cat`, `do`, `dog`, `dogcatcher`.
pub fn animals() -> Vec<Term> {
    vec![
        Term::new("dog", 1),
        Term::new("dogcatcher", 2),
        Term::new("cat", 3),
        Term::new("do", 4),
    ]
}

/// A handful of city names with realistic populations as weights.
pub fn cities() -> Vec<Term> {
    vec![
        Term::new("Shanghai, China", 14_608_512),
        Term::new("Buenos Aires, Argentina", 13_076_300),
        Term::new("Mumbai, India", 12_691_836),
        Term::new("Mexico City, Distrito Federal, Mexico", 12_294_193),
        Term::new("Karachi, Pakistan", 11_624_219),
        Term::new("Istanbul, Turkey", 11_174_257),
        Term::new("Delhi, India", 10_927_986),
        Term::new("Manila, Philippines", 10_444_527),
        Term::new("Moscow, Russia", 10_381_222),
        Term::new("Dhaka, Bangladesh", 10_356_500),
        Term::new("Seoul, South Korea", 10_349_312),
        Term::new("Melbourne, Victoria, Australia", 3_730_206),
        Term::new("Mexicali, Baja California, Mexico", 597_099),
    ]
}

/// Project a result list down to its queries.
pub fn queries(terms: &[Term]) -> Vec<&str> {
    terms.iter().map(Term::query).collect()
}

/// Render a vocabulary in the text term-file format.
pub fn to_term_file(terms: &[Term]) -> String {
    let mut out = format!("{}\n", terms.len());
    for term in terms {
        out.push_str(&term.to_string());
        out.push('\n');
    }
    out
}
