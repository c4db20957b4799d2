//! String operation core implementations.
//!
//! Pure logic over `&str`, independent of the owning text value. Offsets
//! are byte offsets that always fall on `char` boundaries, so splices built
//! on them never cut a multi-byte character.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::ascii;

// ==================== Search Functions ====================

/// Find index of first occurrence of needle, or -1 if not found.
pub fn index(s: &str, needle: &str) -> i64 {
    s.find(needle).map(|i| i as i64).unwrap_or(-1)
}

/// Find index of last occurrence of needle, or -1 if not found.
pub fn last_index(s: &str, needle: &str) -> i64 {
    s.rfind(needle).map(|i| i as i64).unwrap_or(-1)
}

/// Count non-overlapping occurrences of needle.
pub fn count(s: &str, needle: &str) -> usize {
    if needle.is_empty() {
        s.chars().count() + 1
    } else {
        s.matches(needle).count()
    }
}

// ==================== Transform Functions ====================

/// Repeat s n times; n <= 0 yields the empty string.
pub fn repeat(s: &str, n: i64) -> String {
    if n <= 0 {
        String::new()
    } else {
        s.repeat(n as usize)
    }
}

/// Remove the last occurrence of needle, leaving every other occurrence
/// intact. An absent needle yields an unchanged copy.
pub fn remove_last(s: &str, needle: &str) -> String {
    match s.rfind(needle) {
        Some(pos) => {
            let mut out = String::with_capacity(s.len() - needle.len());
            out.push_str(&s[..pos]);
            out.push_str(&s[pos + needle.len()..]);
            out
        }
        None => s.to_string(),
    }
}

/// Trim the ASCII whitespace set from both ends.
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(ascii::is_space)
}

/// Upper-case the first letter of each whitespace-delimited word, leaving
/// the rest of the word unchanged. A simplification of true title-casing.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ascii::is_space(ch) {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            for up in ch.to_uppercase() {
                out.push(up);
            }
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Replace every occurrence of old with new.
pub fn replace(s: &str, old: &str, new: &str) -> String {
    s.replace(old, new)
}

/// Concatenate two strings into a fresh buffer.
pub fn concat(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

// ==================== Split/Join Functions ====================

/// Split s by separator; an empty separator splits into codepoints.
pub fn split(s: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        s.chars().map(|c| c.to_string()).collect()
    } else {
        s.split(sep).map(|part| part.to_string()).collect()
    }
}

/// Join parts with separator.
pub fn join(parts: &[&str], sep: &str) -> String {
    parts.join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_index() {
        assert_eq!(index("aabbcc", "cc"), 4);
        assert_eq!(index("aabbcc", "zz"), -1);
        assert_eq!(last_index("ababab", "ab"), 4);
        assert_eq!(last_index("ababab", "zz"), -1);
    }

    #[test]
    fn test_count() {
        assert_eq!(count("aabbaaccaaddaaffaa", "aa"), 5);
        assert_eq!(count("abc", ""), 4);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat("┐", 5), "┐┐┐┐┐");
        assert_eq!(repeat("ab", 1), "ab");
        assert_eq!(repeat("ab", 0), "");
        assert_eq!(repeat("ab", -3), "");
    }

    #[test]
    fn test_remove_last() {
        assert_eq!(
            remove_last("ost kake ost kake ost", "kake"),
            "ost kake ost  ost"
        );
        assert_eq!(remove_last("ababab", "ab"), "abab");
        assert_eq!(remove_last("aabbcc", "zz"), "aabbcc");
        assert_eq!(remove_last("x┐y┐z", "┐"), "x┐yz");
    }

    #[test]
    fn test_trim_space() {
        assert_eq!(trim_space("    \n\n\nhello\t\t\n\n\n"), "hello");
        // Non-ASCII whitespace is not in the table and survives.
        assert_eq!(trim_space("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
    }

    #[test]
    fn test_title() {
        assert_eq!(title("hello, world"), "Hello, World");
        assert_eq!(title("hELLO"), "HELLO");
        assert_eq!(title("  two\twords"), "  Two\tWords");
    }

    #[test]
    fn test_split() {
        assert_eq!(split("a,b,c", ","), vec!["a", "b", "c"]);
        assert_eq!(split("┐x", ""), vec!["┐", "x"]);
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["a", "b", "c"], ", "), "a, b, c");
    }
}
