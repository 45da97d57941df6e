//! Whitespace cleanup for extracted text.
//!
//! Text scraped from markup tends to carry indentation, runs of tabs and
//! NBSPs, and stacks of blank lines. [`SpaceCollapser`] keeps the line
//! structure but nothing else:
//!
//! ```text
//! "Hello   world\n\n\tfoo "   →   "Hello world\nfoo"
//! ```

use memchr::memchr_iter;

/// Intra-line whitespace: tab, vertical tab, form feed, carriage return,
/// space, NEL and NBSP. Newline is the line separator and is handled apart.
#[inline(always)]
pub const fn is_inline_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{85}' | '\u{A0}'
    )
}

/// Collapses whitespace runs, trims lines and drops blank ones.
///
/// - every run of intra-line whitespace becomes one ASCII space
/// - each line is trimmed of all Unicode whitespace at both ends
/// - lines left empty are removed
/// - remaining lines are joined with `\n`, with no trailing newline
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceCollapser;

impl SpaceCollapser {
    pub const fn new() -> Self {
        Self
    }

    /// Collapses `input` into an existing buffer, clearing it first.
    pub fn collapse_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut start = 0usize;

        // '\n' is ASCII and never a continuation byte, so every split point
        // is a char boundary.
        for nl in memchr_iter(b'\n', bytes) {
            push_line(&input[start..nl], out);
            start = nl + 1;
        }
        push_line(&input[start..], out);
    }

    /// Collapses `input` and returns a new String.
    #[inline]
    pub fn collapse(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.collapse_into(input, &mut out);
        out
    }
}

/// Appends one cleaned line to `out`, preceded by a newline if `out` already
/// holds an earlier line. Blank lines append nothing.
///
/// Edges are trimmed of any Unicode whitespace, so a line holding only
/// U+3000 or U+2003 counts as blank. Inside the line only the intra-line set
/// is collapsed.
fn push_line(line: &str, out: &mut String) {
    let line = line.trim_matches(char::is_whitespace);
    let mut pending_space = false;
    let mut wrote_any = false;

    for c in line.chars() {
        if is_inline_space(c) {
            pending_space = wrote_any;
            continue;
        }

        if !wrote_any {
            if !out.is_empty() {
                out.push('\n');
            }
            wrote_any = true;
        } else if pending_space {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
}
