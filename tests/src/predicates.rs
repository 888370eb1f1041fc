//! Black-box checks of the predicate library, mirroring the CI suite the
//! project started from.

use checkr_core::{is_even, is_palindrome};

#[test]
fn is_even_accepts_even_numbers() {
    assert!(is_even(2));
    assert!(is_even(0));
    assert!(is_even(-4));
}

#[test]
fn is_even_rejects_odd_numbers() {
    assert!(!is_even(3));
    assert!(!is_even(-7));
    assert!(!is_even(1));
}

#[test]
fn is_palindrome_accepts_palindromes() {
    assert!(is_palindrome("madam"));
    assert!(is_palindrome("racecar"));
    assert!(is_palindrome("A man a plan a canal Panama"));
    assert!(is_palindrome(""));
}

#[test]
fn is_palindrome_rejects_non_palindromes() {
    assert!(!is_palindrome("hello"));
    assert!(!is_palindrome("python"));
    assert!(!is_palindrome("OpenAI"));
}

#[test]
fn is_palindrome_ignores_case() {
    assert!(is_palindrome("Madam"));
    assert!(is_palindrome("RaceCar"));
}

#[test]
fn is_palindrome_matches_normalized_reverse() {
    let samples = [
        "Step on no pets",
        "Was it a car or a cat I saw",
        "abc",
        "ab  a",
        "No lemon, no melon",
        "\t",
    ];

    for s in samples {
        let normalized: String = s.to_lowercase().replace(' ', "");
        let reversed: String = normalized.chars().rev().collect();
        assert_eq!(
            is_palindrome(s),
            normalized == reversed,
            "disagreement for {s:?}"
        );
    }
}
