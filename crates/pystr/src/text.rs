//! The owned text value and its operation surface.

use std::fmt;

use pystr_core::{ascii, lines, strings};

use crate::error::Error;

/// An owned text value with Python-style string operations.
///
/// Operations fall into two categories. Mutating operations (`strip`,
/// `capitalize`, `lower`, `upper`, `append`, `replace`) edit the buffer in
/// place and return `&mut Self` so calls can be chained. Derived operations
/// (`add`, `subtract`, `multiply`, `split`, the line splitters, `encode`)
/// allocate and return independent values; the original is never aliased
/// by the result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PyStr {
    text: String,
}

impl PyStr {
    /// Create a text value owning a fresh copy of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The canonical accessor for the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True if the text contains no codepoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    // ==================== In-place operations ====================

    /// Remove leading and trailing ASCII whitespace (space, tab, LF, CR,
    /// vertical tab, form feed) in place.
    pub fn strip(&mut self) -> &mut Self {
        self.text = strings::trim_space(&self.text).to_string();
        self
    }

    /// Title-case each whitespace-delimited word in place: the first
    /// letter is upper-cased, the rest of the word is left unchanged.
    ///
    /// This is a deliberate simplification of true Unicode title-casing.
    pub fn capitalize(&mut self) -> &mut Self {
        self.text = strings::title(&self.text);
        self
    }

    /// Lower-case the text in place. Simple codepoint mapping, not
    /// locale-aware.
    pub fn lower(&mut self) -> &mut Self {
        self.text = self.text.to_lowercase();
        self
    }

    /// Upper-case the text in place. Simple codepoint mapping, not
    /// locale-aware.
    pub fn upper(&mut self) -> &mut Self {
        self.text = self.text.to_uppercase();
        self
    }

    /// Append `text` to the buffer.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Replace every occurrence of `old` with `new` in place.
    pub fn replace(&mut self, old: &str, new: &str) -> &mut Self {
        self.text = strings::replace(&self.text, old, new);
        self
    }

    // ==================== Derived operations ====================

    /// The concatenation of self and `text` as a new value; self is left
    /// untouched.
    pub fn add(&self, text: &str) -> PyStr {
        PyStr::new(strings::concat(&self.text, text))
    }

    /// A new value with the last occurrence of `needle` removed. Earlier
    /// occurrences are preserved verbatim; an absent needle yields an
    /// equal copy.
    pub fn subtract(&self, needle: &str) -> PyStr {
        PyStr::new(strings::remove_last(&self.text, needle))
    }

    /// The text repeated `n` times as a new value; `n <= 0` yields the
    /// empty value. Repetition operates on whole codepoints.
    pub fn multiply(&self, n: i64) -> PyStr {
        PyStr::new(strings::repeat(&self.text, n))
    }

    /// Split by `sep`; an empty separator splits into codepoints.
    pub fn split(&self, sep: &str) -> Vec<String> {
        strings::split(&self.text, sep)
    }

    /// Split into logical lines, treating `\r\n`, lone `\r`, and lone
    /// `\n` as a single boundary form. Terminator-only lines vanish;
    /// whitespace-only lines are kept.
    pub fn split_lines(&self) -> Vec<String> {
        lines::split_lines(&self.text)
    }

    /// Like [`split_lines`](PyStr::split_lines), but whitespace-only
    /// lines are dropped as well.
    pub fn split_no_blank_lines(&self) -> Vec<String> {
        lines::split_no_blank_lines(&self.text)
    }

    /// The UTF-8 encoding of the text.
    pub fn encode(&self) -> Vec<u8> {
        self.text.as_bytes().to_vec()
    }

    // ==================== Queries ====================

    /// True iff `needle` occurs anywhere in the text; an empty needle
    /// trivially does.
    pub fn has(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// True iff the text occurs anywhere inside `haystack`.
    pub fn is_in(&self, haystack: &str) -> bool {
        haystack.contains(self.text.as_str())
    }

    /// Byte offset of the first occurrence of `needle`, or -1 if absent.
    /// Offsets always fall on codepoint boundaries.
    pub fn find(&self, needle: &str) -> i64 {
        strings::index(&self.text, needle)
    }

    /// Byte offset of the last occurrence of `needle`, or -1 if absent.
    pub fn rfind(&self, needle: &str) -> i64 {
        strings::last_index(&self.text, needle)
    }

    /// Byte offset of the first occurrence of `needle`, or
    /// [`Error::NotFound`] when it is absent.
    pub fn index(&self, needle: &str) -> Result<usize, Error> {
        self.text
            .find(needle)
            .ok_or_else(|| Error::NotFound(needle.to_string()))
    }

    /// Count non-overlapping occurrences of `needle`.
    pub fn count(&self, needle: &str) -> usize {
        strings::count(&self.text, needle)
    }

    /// Prefix test.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }

    /// Suffix test.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }

    /// Join `parts` with the text as separator.
    pub fn join<S: AsRef<str>>(&self, parts: &[S]) -> PyStr {
        let refs: Vec<&str> = parts.iter().map(|part| part.as_ref()).collect();
        PyStr::new(strings::join(&refs, &self.text))
    }

    /// True iff the text is non-empty and every codepoint is an ASCII
    /// decimal digit. The empty text is not a digit string.
    pub fn is_digit(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(ascii::is_digit)
    }
}

impl From<&str> for PyStr {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PyStr {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl AsRef<str> for PyStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for PyStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
