//! Term files on disk, loaded and indexed end to end.

use std::fs;
use std::path::PathBuf;

use autocomplete::{read_terms, Autocomplete, LoadError, Term};
use tempfile::TempDir;

use crate::common::{cities, queries, to_term_file};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write term file");
    path
}

#[test]
fn test_text_file_to_index() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "cities.txt", &to_term_file(&cities()));

    let index: Autocomplete = read_terms(&path).unwrap().into_iter().collect();
    assert_eq!(index.len(), cities().len());
    assert_eq!(
        queries(&index.top_matches("Me", 2)),
        vec!["Mexico City, Distrito Federal, Mexico", "Melbourne, Victoria, Australia"]
    );
}

#[test]
fn test_padded_weights() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "wiktionary.txt",
        "3\n   5627187200\tthe\n   3395006400\tof\n   2994418400\tand\n",
    );

    let terms = read_terms(&path).unwrap();
    assert_eq!(terms[0], Term::new("the", 5_627_187_200));
    assert_eq!(terms[2].query(), "and");
}

#[test]
fn test_json_file_to_index() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::to_string(&cities()).unwrap();
    let path = write_file(&dir, "cities.JSON", &json);

    let index: Autocomplete = read_terms(&path).unwrap().into_iter().collect();
    assert_eq!(index.count_matches("M"), 6);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_terms(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_truncated_file_reports_counts() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "short.txt", "5\n1\ta\n2\tb\n");
    let err = read_terms(&path).unwrap_err();
    assert_eq!(err.to_string(), "declared 5 terms but found 2");
}

#[test]
fn test_windows_line_endings() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "crlf.txt", "2\r\n4\tdo\r\n1\tdog\r\n");
    let terms = read_terms(&path).unwrap();
    assert_eq!(queries(&terms), vec!["do", "dog"]);
}
