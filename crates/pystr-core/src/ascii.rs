//! ASCII character class tables and predicates.
//!
//! The tables reproduce the canonical ASCII classes; predicates consult
//! them rather than the broader Unicode categories.

/// All ASCII letters, lowercase first.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Hexadecimal digits, both cases.
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

/// Octal digits.
pub const OCT_DIGITS: &str = "01234567";

/// ASCII punctuation characters.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// All printable ASCII characters, whitespace included.
pub const PRINTABLE: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c";

/// ASCII whitespace: space, tab, LF, CR, vertical tab, form feed.
pub const WHITESPACE: &str = " \t\n\r\x0b\x0c";

/// Check if ch is an ASCII decimal digit.
pub fn is_digit(ch: char) -> bool {
    DIGITS.contains(ch)
}

/// Check if ch is in the ASCII whitespace set.
pub fn is_space(ch: char) -> bool {
    WHITESPACE.contains(ch)
}

/// Check if ch is a line boundary character (CR or LF).
pub fn is_line_break(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}
