use rstest::rstest;

use regex_engine::{is_match, PatternError, Regex};

#[rstest]
#[case("hello")]
#[case("a.b")]
#[case(r"path\to")]
#[case("x y z")]
fn test_pattern_matches_itself(#[case] text: &str) {
    assert!(is_match(text, text));
}

#[rstest]
#[case("")]
#[case("a")]
#[case("anything at all")]
fn test_empty_pattern_matches_everything(#[case] subject: &str) {
    assert!(is_match(subject, ""));
}

#[test]
fn test_fully_anchored_empty_pattern() {
    assert!(is_match("", "^$"));
    assert!(!is_match("a", "^$"));
}

#[rstest]
#[case("x")]
#[case(".")]
#[case("?")]
#[case("é")]
fn test_wildcard_matches_any_single_char(#[case] subject: &str) {
    assert!(is_match(subject, "."));
}

#[test]
fn test_wildcard_needs_a_char() {
    assert!(!is_match("", "."));
}

#[rstest]
#[case("^a", "ab", true)]
#[case("^a", "ba", false)]
#[case("a$", "ba", true)]
#[case("a$", "ab", false)]
fn test_anchors(#[case] pattern: &str, #[case] subject: &str, #[case] expected: bool) {
    assert_eq!(is_match(subject, pattern), expected);
}

#[rstest]
#[case(r"\^", "^", true)]
#[case(r"\?", "?", true)]
#[case(r"a\?", "a?", true)]
#[case(r"a\?", "a", false)]
#[case(r"\$", "$", true)]
#[case(r"a\.c", "a.c", true)]
#[case(r"a\.c", "abc", false)]
fn test_escapes(#[case] pattern: &str, #[case] subject: &str, #[case] expected: bool) {
    assert_eq!(is_match(subject, pattern), expected);
}

#[rstest]
#[case("a*b", "b", true)]
#[case("a*b", "aaab", true)]
#[case("a?b", "b", true)]
#[case("a?b", "aab", false)]
#[case("a+b", "b", false)]
#[case("a+b", "ab", true)]
fn test_quantifiers(#[case] pattern: &str, #[case] subject: &str, #[case] expected: bool) {
    assert_eq!(is_match(subject, pattern), expected);
}

#[rstest]
#[case("a")]
#[case("*a")]
#[case("")]
fn test_leading_quantifier_never_matches(#[case] subject: &str) {
    let regex = Regex::new("*a");
    assert!(!regex.is_match(subject));
    assert_eq!(
        regex.validate(),
        Err(PatternError::DanglingQuantifier { quantifier: '*', position: 0 })
    );
}

#[test]
fn test_quantified_end_anchor_fails() {
    let regex = Regex::new("a*$");
    assert!(!regex.is_match("aaa"));
    assert_eq!(regex.validate(), Err(PatternError::QuantifiedEndAnchor));
}

#[test]
fn test_repeated_calls_agree() {
    let regex = Regex::new("^colou?r$");
    let first: Vec<bool> = ["color", "colour", "colouur"].iter().map(|s| regex.is_match(s)).collect();
    assert_eq!(first, vec![true, true, false]);
    for _ in 0..5 {
        let again: Vec<bool> = ["color", "colour", "colouur"].iter().map(|s| regex.is_match(s)).collect();
        assert_eq!(again, first);
    }
}

#[test]
fn test_regex_is_shareable_across_threads() {
    let regex = std::sync::Arc::new(Regex::new("a+b"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let regex = regex.clone();
            std::thread::spawn(move || regex.is_match("aab"))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
