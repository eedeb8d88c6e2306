//! Balanced-parenthesis scanning over raw text.
//!
//! This is a plain byte scan: parentheses inside string literals and comments are counted like
//! any other, so `f(")")` ends at the quoted paren. Callers that need exact boundaries should
//! confirm the result with the classifier.

use crate::span::TextSpan;

/// Finds the `(` that opens the call whose token ends at `anchor`.
///
/// Scans backward from `anchor` on the same line, skipping parentheses escaped with a
/// backslash. Returns `None` if a line break or the start of the text comes first.
#[must_use]
pub fn find_open_paren(text: &str, anchor: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = anchor.min(bytes.len());
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b'\n' => return None,
            b'(' if i == 0 || bytes[i - 1] != b'\\' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Finds the `)` matching the `(` at `open`.
///
/// The returned offset points at the closing paren itself, so `text[open..=close]` holds as
/// many `(` as `)` and no shorter prefix starting at `open` does. Returns `None` if the text
/// ends while parentheses are still open, or if `open` is not a `(`.
#[must_use]
pub fn scan_matching_close(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    for (i, &byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Expands a call token such as `page.add(` into the whole call, closing paren included.
///
/// `token` must start at the callee and end just past its opening parenthesis.
#[must_use]
pub fn call_span(text: &str, token: TextSpan) -> Option<TextSpan> {
    let open = find_open_paren(text, token.end)?;
    if open < token.start {
        return None;
    }
    let close = scan_matching_close(text, open)?;
    Some(TextSpan::new(token.start, close + 1))
}

#[cfg(test)]
#[path = "tests/scanner.rs"]
mod tests;
