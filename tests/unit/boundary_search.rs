//! Boundary search over plain slices with injected comparators.

use autocomplete::{equal_range, first_index_of, last_index_of};
use std::cmp::Ordering;

fn case_insensitive(a: &str, b: &&str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[test]
fn test_genome_letters() {
    let a = ["A", "A", "C", "G", "G", "T"];
    assert_eq!(first_index_of(&a, "G", case_insensitive), Some(3));
    assert_eq!(last_index_of(&a, "G", case_insensitive), Some(4));
    assert_eq!(first_index_of(&a, "X", case_insensitive), None);
    assert_eq!(last_index_of(&a, "X", case_insensitive), None);
}

#[test]
fn test_first_and_last_elements() {
    let a = ["A", "A", "C", "G", "G", "T"];
    assert_eq!(equal_range(&a, "A", case_insensitive), Some(0..=1));
    assert_eq!(equal_range(&a, "T", case_insensitive), Some(5..=5));
}

#[test]
fn test_key_of_another_type() {
    // Search (id, name) records by id alone
    let records = [(1, "one"), (3, "three"), (3, "trois"), (7, "seven")];
    let by_id = |key: &u32, rec: &(u32, &str)| key.cmp(&rec.0);
    assert_eq!(equal_range(&records, &3, by_id), Some(1..=2));
    assert_eq!(equal_range(&records, &4, by_id), None);
}

#[test]
fn test_key_below_and_above_all() {
    let a = [10, 20, 30];
    let cmp = |k: &i32, e: &i32| k.cmp(e);
    assert_eq!(first_index_of(&a, &5, cmp), None);
    assert_eq!(last_index_of(&a, &35, cmp), None);
}

#[test]
fn test_comparison_count_is_logarithmic() {
    let a: Vec<u32> = (0..1024).map(|i| i / 4).collect();
    let mut calls = 0;
    let found = first_index_of(&a, &100, |k: &u32, e: &u32| {
        calls += 1;
        k.cmp(e)
    });
    assert_eq!(found, Some(400));
    assert!(calls <= 11, "{} comparisons for 1024 elements", calls);
}
