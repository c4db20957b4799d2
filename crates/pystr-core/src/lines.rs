//! Newline-normalizing line splitter.
//!
//! `\r\n`, lone `\r`, and lone `\n` all count as a single line boundary.
//! Two blank-line policies are offered: [`split_lines`] drops only
//! terminator-only lines, [`split_no_blank_lines`] drops whitespace-only
//! lines as well.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{ascii, seq, strings};

/// Rewrite every boundary form to a single marker, split on it, and strip
/// any stray boundary characters a malformed candidate may still carry.
fn boundary_candidates(text: &str) -> Vec<String> {
    // CRLF first so a pair is never counted as two boundaries.
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let candidates = strings::split(&normalized, "\n");
    seq::map(
        |line: &String| line.trim_matches(ascii::is_line_break).to_string(),
        &candidates,
    )
}

/// Split text into logical lines, in source order.
///
/// Candidates that are empty once boundary characters are stripped vanish,
/// so consecutive boundaries contribute no lines and a terminator-final
/// text has no trailing empty element. Whitespace-only lines are kept.
pub fn split_lines(text: &str) -> Vec<String> {
    let candidates = boundary_candidates(text);
    seq::filter(|line: &String| !line.is_empty(), &candidates)
}

/// Like [`split_lines`], but lines that are blank after trimming leading
/// and trailing whitespace are dropped too.
pub fn split_no_blank_lines(text: &str) -> Vec<String> {
    let lines = split_lines(text);
    seq::filter(|line: &String| !strings::trim_space(line).is_empty(), &lines)
}
