//! Object range resolution: which span of the document a command operates on.
//!
//! An explicit selection covering several complete sibling calls is trusted as-is, which lets a
//! user batch several expressions into one `controls` list. Anything else falls back to the
//! single call at or around the cursor, found by matching a call token on the cursor's line and
//! scanning for its closing parenthesis.

use crate::classify::classify;
use crate::document::Document;
use crate::error::RefactorError;
use crate::parse::SourceParser;
use crate::scanner::call_span;
use crate::span::TextSpan;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// A callee (identifier or dotted path) followed by its opening parenthesis.
static CALL_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w.]+\s*\(").unwrap());

/// Resolves the span a command should operate on.
///
/// # Errors
///
/// - [`RefactorError::Malformed`] if the selection spans several calls and one is incomplete.
/// - [`RefactorError::NoTarget`] if no call can be found at the selection start.
pub fn resolve<D: Document + ?Sized>(
    parser: &mut SourceParser,
    document: &D,
    selection: TextSpan,
) -> Result<TextSpan, RefactorError> {
    if !selection.is_empty() {
        let selected = document
            .text_in(selection)
            .ok_or(RefactorError::NoTarget)?;
        let classification = classify(parser, selected);
        if classification.node_count > 1 {
            if classification.correct_text {
                debug!(?selection, "trusting multi-call selection");
                return Ok(selection);
            }
            debug!(?selection, "rejecting malformed multi-call selection");
            return Err(RefactorError::Malformed);
        }
    }

    resolve_call_at(document, selection.start).ok_or(RefactorError::NoTarget)
}

/// [`resolve`] with the failure reason dropped.
pub fn resolve_object_range<D: Document + ?Sized>(
    parser: &mut SourceParser,
    selection: TextSpan,
    document: &D,
) -> Option<TextSpan> {
    resolve(parser, document, selection).ok()
}

/// Finds the single call at `offset`.
///
/// A call token touching the offset decides the result on its own: if its parentheses do not
/// balance there is no call. Without a touching token, the innermost call whose span contains
/// the offset is used, so a cursor resting on an argument still finds its call.
#[must_use]
pub fn resolve_call_at<D: Document + ?Sized>(document: &D, offset: usize) -> Option<TextSpan> {
    let text = document.text();
    if let Some(token) = document.find_word_touching(offset, &CALL_TOKEN) {
        let span = call_span(text, token);
        debug!(?token, ?span, "resolved call from touching token");
        return span;
    }

    let span = enclosing_call(text, offset);
    debug!(offset, ?span, "resolved enclosing call");
    span
}

fn enclosing_call(text: &str, offset: usize) -> Option<TextSpan> {
    let tokens: Vec<TextSpan> = CALL_TOKEN
        .find_iter(text)
        .take_while(|found| found.start() < offset)
        .map(|found| TextSpan::new(found.start(), found.end()))
        .collect();

    tokens.into_iter().rev().find_map(|token| {
        let span = call_span(text, token)?;
        trace!(?token, ?span, "candidate enclosing call");
        span.touches(offset).then_some(span)
    })
}

#[cfg(test)]
#[path = "tests/resolve.rs"]
mod tests;
