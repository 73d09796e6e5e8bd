#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn verdicts(report: &ProbeReport) -> Vec<(String, String)> {
    report
        .checks
        .iter()
        .map(|check| (check.label.clone(), check.outcome.to_string()))
        .collect()
}

fn expect(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(label, outcome)| ((*label).to_string(), (*outcome).to_string()))
        .collect()
}

#[test]
fn test_probe_names_are_unique() {
    let mut names: Vec<&str> = PROBES.iter().map(|probe| probe.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), PROBES.len());
}

#[test]
fn test_autoboxing() {
    let report = autoboxing(&InternPool::new()).unwrap();
    assert_eq!(
        verdicts(&report),
        expect(&[
            ("a == b", "true"),
            ("a == 42", "true"),
            ("a.equals(b)", "true"),
            ("c == d", "false"),
            ("c == 666", "true"),
            ("c.equals(d)", "true"),
            ("t == s", "true"),
            ("t == true", "true"),
        ])
    );
}

#[test]
fn test_autoboxing_with_raised_cache() {
    let pool = InternPool::with_config(valsem_intern::PoolConfig::with_int_cache_high(1000));
    let report = autoboxing(&pool).unwrap();
    assert_eq!(report.outcome("c == d"), Some(&Outcome::Bool(true)));
}

#[test]
fn test_booleans() {
    let report = booleans(&InternPool::new()).unwrap();
    assert_eq!(
        verdicts(&report),
        expect(&[
            ("a == b", "true"),
            ("a == B", "true"),
            ("A == B", "false"),
            ("C == D", "true"),
            ("a == TRUE", "true"),
            ("A == TRUE", "false"),
            ("C == TRUE", "true"),
            ("A.equals(B)", "true"),
            ("A.equals(true)", "true"),
            ("A.equals(TRUE)", "true"),
        ])
    );
}

#[test]
fn test_enums_are_all_true() {
    let report = enums(&InternPool::new()).unwrap();
    assert_eq!(report.checks.len(), 9);
    assert!(report
        .checks
        .iter()
        .all(|check| check.outcome == Outcome::Bool(true)));
}

#[test]
fn test_strings() {
    let report = strings(&InternPool::new()).unwrap();
    assert_eq!(
        verdicts(&report),
        expect(&[
            ("\"a\" == \"a\"", "true"),
            ("a == \"a\"", "false"),
            ("a == b", "false"),
            ("a.equals(b)", "true"),
            ("a", "a"),
            ("a == b", "false"),
            ("a.equals(b)", "true"),
        ])
    );
}

#[test]
fn test_numbers() {
    let report = numbers(&InternPool::new()).unwrap();
    let bool_of = |label: &str| match report.outcome(label) {
        Some(Outcome::Bool(b)) => *b,
        other => panic!("{label}: {other:?}"),
    };

    assert!(!bool_of("A"));
    assert!(bool_of("B"));
    assert!(bool_of("C"));
    assert!(bool_of("D"));
    assert!(bool_of("E"));
    assert!(!bool_of("F"));
    assert!(!bool_of("G"));
    assert!(!bool_of("H"));
    assert!(!bool_of("I"));
    assert!(!bool_of("J"));
    assert!(!bool_of("K"));
    assert!(bool_of("L"));
    assert_eq!(report.outcome("M"), Some(&Outcome::Text("-1".to_string())));
    assert_eq!(
        report.outcome("sd"),
        Some(&Outcome::Text("0.6000000000000001".to_string()))
    );
}

#[test]
fn test_numbers_integer_overflow_wraps() {
    let report = numbers(&InternPool::new()).unwrap();
    let text = |label: &str| report.outcome(label).unwrap().to_string();

    assert_eq!(text("N"), "32767");
    assert_eq!(text("O"), "32768");
    assert_eq!(text("P"), "-32768");
    assert_eq!(text("Q"), "2147483647");
    assert_eq!(text("R"), "-2147483648");
}

#[test]
fn test_arrays() {
    let report = arrays(&InternPool::new()).unwrap();
    assert_eq!(
        verdicts(&report),
        expect(&[
            ("i", "[3, 2, 1]"),
            ("k", "[3, 2, 1]"),
            ("i", "[1, 2, 3]"),
            ("j", "[1, 2, 3]"),
            ("k", "[1, 2, 3]"),
        ])
    );
}

#[test]
fn test_collections() {
    let report = collections(&InternPool::new()).unwrap();
    assert_eq!(
        verdicts(&report),
        expect(&[
            ("a", "[d, a, b, c]"),
            ("b", "[d, a, b, c]"),
            ("c", "[d, a, b, c]"),
        ])
    );
}

#[test]
fn test_mutable_key() {
    let report = mutable_key(&InternPool::new()).unwrap();
    let contains: Vec<&Outcome> = report.outcomes("set.contains(list)").collect();
    assert_eq!(contains, vec![&Outcome::Bool(true), &Outcome::Bool(false)]);
    let lists: Vec<String> = report.outcomes("list").map(ToString::to_string).collect();
    assert_eq!(lists, vec!["[zoo, foo, bar]", "[bar, foo, zoo]"]);
    assert_eq!(report.outcome("stale entries"), Some(&Outcome::Text("1".to_string())));
}
