//! # Palindrome Check
//!
//! Text is normalized before comparison:
//! * lower-cased with full Unicode rules (`str::to_lowercase`),
//! * stripped of the space character `' '`.
//!
//! Nothing else is removed. Tabs, newlines and punctuation all take part
//! in the comparison, so `"race car!"` is not a palindrome.

const STRIPPED: char = ' ';

/// Lower-cases `s` and drops every `' '`. The input is left untouched.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().chars().filter(|&c| c != STRIPPED).collect()
}

/// Returns `true` when the normalized form of `s` reads the same in both
/// directions. The empty string is a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    let normalized: Vec<char> = normalize(s).chars().collect();

    normalized.iter().eq(normalized.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("A man a plan"), "amanaplan");
        assert_eq!(normalize("  "), "");
        assert_eq!(normalize("Tab\there"), "tab\there");
        assert_eq!(normalize("Hello, World!"), "hello,world!");
    }

    #[test]
    fn test_is_palindrome_plain() {
        assert!(is_palindrome("madam"));
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("a"));

        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome("python"));
    }

    #[test]
    fn test_is_palindrome_empty() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("   "));
    }

    #[test]
    fn test_is_palindrome_case_and_spaces() {
        assert!(is_palindrome("Madam"));
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(is_palindrome(" r a c e c a r "));
    }

    #[test]
    fn test_is_palindrome_keeps_other_characters() {
        // Only ' ' is stripped
        assert!(!is_palindrome("race\tcar"));
        assert!(!is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("!ab ba!"));
    }

    #[test]
    fn test_is_palindrome_unicode() {
        assert!(is_palindrome("Ésé"));
        assert!(is_palindrome("日本日"));
        assert!(!is_palindrome("日本"));
    }

    #[test]
    fn test_is_palindrome_does_not_modify_input() {
        let s = String::from("Never Odd Or Even");
        assert!(is_palindrome(&s));
        assert_eq!(s, "Never Odd Or Even");
    }
}
