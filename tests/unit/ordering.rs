//! Comparator tests through the public API.

use autocomplete::{natural_order, reverse_weight_order, InvalidArgument, PrefixOrder, Term};
use std::cmp::Ordering;

#[test]
fn test_natural_order_sorts_vocabulary() {
    let mut terms = crate::common::animals();
    terms.sort_by(natural_order);
    assert_eq!(
        crate::common::queries(&terms),
        vec!["cat", "do", "dog", "dogcatcher"]
    );
}

#[test]
fn test_natural_order_is_case_sensitive() {
    // Uppercase code points sort before lowercase
    assert_eq!(
        natural_order(&Term::new("Zebra", 1), &Term::new("apple", 1)),
        Ordering::Less
    );
}

#[test]
fn test_reverse_weight_sort() {
    let mut terms = crate::common::animals();
    terms.sort_by(reverse_weight_order);
    let weights: Vec<u64> = terms.iter().map(Term::weight).collect();
    assert_eq!(weights, vec![4, 3, 2, 1]);
}

#[test]
fn test_prefix_order_matches_original_examples() {
    let dog = Term::new("dog", 1);
    let dogcatcher = Term::new("dogcatcher", 2);
    let cat = Term::new("cat", 3);
    let do_term = Term::new("do", 4);

    let by3 = PrefixOrder::new(3);
    assert_eq!(by3.compare_terms(&dog, &dogcatcher), Ordering::Equal);
    assert_eq!(by3.compare_terms(&dogcatcher, &do_term), Ordering::Greater);
    assert_eq!(by3.compare_terms(&cat, &dog), Ordering::Less);
}

#[test]
fn test_prefix_order_window_larger_than_both() {
    let by10 = PrefixOrder::new(10);
    assert_eq!(by10.compare("abc", "abd"), Ordering::Less);
    assert_eq!(by10.compare("abc", "abc"), Ordering::Equal);
    assert_eq!(by10.compare("abc", "ab"), Ordering::Greater);
}

#[test]
fn test_prefix_order_is_antisymmetric_on_examples() {
    let by2 = PrefixOrder::new(2);
    for (a, b) in [("a", "ab"), ("ba", "ab"), ("", "x"), ("xy", "xz")] {
        assert_eq!(by2.compare(a, b), by2.compare(b, a).reverse(), "{} vs {}", a, b);
    }
}

#[test]
fn test_prefix_order_rejects_negative_length() {
    assert_eq!(
        PrefixOrder::try_from(-7i64),
        Err(InvalidArgument::NegativePrefixLength { length: -7 })
    );
    assert_eq!(PrefixOrder::try_from(0i64), Ok(PrefixOrder::new(0)));
}
