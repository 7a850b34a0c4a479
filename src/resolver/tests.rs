use rstest::rstest;

use super::*;
use crate::config::Limits;
use crate::parser;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// Resolves the first token of `pattern` against `subject` from `start` and
// returns the verdict together with the number of tail scans it took.
fn resolve_first(pattern: &str, subject: &str, start: usize) -> (bool, usize) {
    let compiled = parser::compile(pattern);
    let token = compiled.tokens[0];
    let quantifier = token.quantifier.expect("first token must be quantified");
    let view = View::new(&compiled);
    let mut budget = Budget::new(Limits::default());
    let matched = resolve(token.atom, quantifier, view.tail(0), &chars(subject), start, &mut budget).unwrap();
    (matched, budget.scans())
}

#[rstest]
#[case("a*b", "b", true)]
#[case("a*b", "aaab", true)]
#[case("a*b", "aaa", false)]
#[case("a?b", "b", true)]
#[case("a?b", "ab", true)]
#[case("a?b", "aab", false)]
#[case("a+b", "b", false)]
#[case("a+b", "ab", true)]
#[case("a+b", "aaab", true)]
#[case(".*c", "xyzc", true)]
#[case("a*", "xyz", true)]
fn test_resolve(#[case] pattern: &str, #[case] subject: &str, #[case] expected: bool) {
    assert_eq!(resolve_first(pattern, subject, 0).0, expected);
}

#[test]
fn test_resolve_from_offset() {
    assert!(resolve_first("a*b", "xxaab", 2).0);
    assert!(!resolve_first("a*b", "xxaab", 1).0);
}

#[test]
fn test_smallest_count_wins() {
    // zero repetitions already leave a suffix the tail matches
    assert_eq!(resolve_first("a*a", "aaaa", 0), (true, 1));
    assert_eq!(resolve_first("a*b", "aaab", 0), (true, 4));
}

#[test]
fn test_one_or_more_checks_presence_first() {
    assert_eq!(resolve_first("a+b", "b", 0), (false, 0));
}

#[test]
fn test_zero_or_one_stops_after_one() {
    assert_eq!(resolve_first("a?b", "aaab", 0), (false, 2));
}

#[test]
fn test_trial_stops_at_subject_end() {
    assert_eq!(resolve_first("a+", "a", 0), (false, 0));
    assert_eq!(resolve_first("a*b", "aaa", 0), (false, 3));
}

#[test]
fn test_quantified_end_anchor_is_refused() {
    assert_eq!(resolve_first("a*$", "aaa", 0), (false, 0));
    assert_eq!(resolve_first("a+$", "aaa", 0), (false, 0));
}

#[test]
fn test_tail_is_start_anchored() {
    // "b" occurs later in the suffix but not right after the repetitions
    assert!(!resolve_first("a?b", "xb", 0).0);
}
