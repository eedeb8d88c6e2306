//! Orchestration of the wrap and unwrap refactors against a [`Document`].
//!
//! Every command re-reads the current text and selection, computes a single replacement, and
//! applies it in one edit at the end. Nothing is written until every step has succeeded, so a
//! refused command leaves the document exactly as it was.
//!
//! Unwrapping walks through these states, aborting without an edit at any failure:
//!
//! ```text
//! Idle -> Resolved(span) -> Parsed -> Located(value, kind)
//!      -> ReResolved(span') -> Dedented -> Applied
//! ```

use crate::classify::{classify, ClassificationResult};
use crate::document::Document;
use crate::error::RefactorError;
use crate::parse::SourceParser;
use crate::resolve::{resolve, resolve_call_at};
use crate::span::TextSpan;
use crate::unwrap::{dedent, locate_unwrap_target, UnwrapTarget};
use crate::wrap::{wrap, IndentationContext, WrapKind};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// A refactor the host may offer for the current selection.
pub enum Action {
    /// Wrap the call as `content=`.
    WrapContent,
    /// Wrap the range as the sole element of `controls=[...]`.
    WrapControls,
    /// Replace a wrapper call with its content.
    RemoveWrapper,
}

impl Action {
    #[must_use]
    /// Label shown to the user.
    pub fn title(self) -> &'static str {
        match self {
            Action::WrapContent => "Wrap in content",
            Action::WrapControls => "Wrap in controls",
            Action::RemoveWrapper => "Remove wrapper",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An edit that was applied to the document.
pub struct Applied {
    /// Replaced range, in offsets from before the edit.
    pub span: TextSpan,
    /// Text inserted in place of `span`.
    pub replacement: String,
    /// Selection set after the edit, in offsets from after it.
    pub selection: TextSpan,
}

/// Runs refactors with one parser and one wrapper name.
pub struct Refactorer {
    parser: SourceParser,
    wrapper: String,
}

impl Refactorer {
    #[must_use]
    /// Refactorer inserting `wrapper` calls, parsing with `parser`.
    pub fn new(parser: SourceParser, wrapper: impl Into<String>) -> Self {
        Self {
            parser,
            wrapper: wrapper.into(),
        }
    }

    /// Refactorer for Python sources.
    ///
    /// # Errors
    ///
    /// Returns [`RefactorError::Grammar`] if the Python grammar cannot be loaded.
    pub fn python(wrapper: impl Into<String>) -> Result<Self, RefactorError> {
        Ok(Self::new(SourceParser::python()?, wrapper))
    }

    #[must_use]
    /// Name of the wrapper call a wrap inserts.
    pub fn wrapper(&self) -> &str {
        &self.wrapper
    }

    /// Counts the top-level calls in `text`. See [`classify`].
    pub fn classify(&mut self, text: &str) -> ClassificationResult {
        classify(&mut self.parser, text)
    }

    /// Finds the content of the wrapper call in `span_text`. See [`locate_unwrap_target`].
    pub fn locate_unwrap_target(&mut self, span_text: &str) -> Option<UnwrapTarget> {
        locate_unwrap_target(&mut self.parser, span_text)
    }

    /// Resolves the object range for the document's current selection.
    pub fn resolve_object_range<D: Document + ?Sized>(
        &mut self,
        document: &D,
    ) -> Option<TextSpan> {
        self.target(document).ok()
    }

    /// The resolved range with surrounding whitespace of a raw selection left out.
    fn target<D: Document + ?Sized>(&mut self, document: &D) -> Result<TextSpan, RefactorError> {
        let span = resolve(&mut self.parser, document, document.selection())?;
        let text = document.text_in(span).ok_or(RefactorError::NoTarget)?;
        let leading = text.len() - text.trim_start().len();
        let trailing = text.len() - text.trim_end().len();
        if leading == text.len() {
            return Err(RefactorError::NoTarget);
        }
        Ok(TextSpan::new(span.start + leading, span.end - trailing))
    }

    /// Lists the refactors that make sense for the current selection.
    ///
    /// Wrapping in `controls` is offered whenever a range resolves. Wrapping in `content` and
    /// removing a wrapper need the range to be a single call.
    pub fn actions<D: Document + ?Sized>(&mut self, document: &D) -> Vec<Action> {
        let Ok(span) = self.target(document) else {
            return Vec::new();
        };
        let Some(text) = document.text_in(span) else {
            return Vec::new();
        };

        let classification = classify(&mut self.parser, text);
        let single = classification.node_count == 1;
        let mut actions = Vec::new();
        if single {
            actions.push(Action::WrapContent);
        }
        actions.push(Action::WrapControls);
        if single && locate_unwrap_target(&mut self.parser, text).is_some() {
            actions.push(Action::RemoveWrapper);
        }
        debug!(?span, ?actions, "offering actions");
        actions
    }

    /// Wraps the resolved range as the `kind` argument of a new wrapper call, then selects the
    /// wrapper name so it can be renamed in place.
    ///
    /// # Errors
    ///
    /// Returns [`RefactorError::NoTarget`] or [`RefactorError::Malformed`] if no range resolves,
    /// and [`RefactorError::EditRejected`] if the document refuses the edit.
    pub fn wrap<D: Document + ?Sized>(
        &mut self,
        document: &mut D,
        kind: WrapKind,
    ) -> Result<Applied, RefactorError> {
        let span = self.target(document)?;
        let replacement = wrap_span(document, span, kind, &self.wrapper)?;
        let selection = TextSpan::new(span.start, span.start + self.wrapper.len());
        commit(document, span, replacement, selection)
    }

    /// Replaces the resolved wrapper call with its content, dedented by the levels the wrap
    /// added, and selects the hoisted content.
    ///
    /// # Errors
    ///
    /// Returns [`RefactorError::AmbiguousUnwrap`] if the range is not a wrapper with a single
    /// identifiable content call, or if that call is only the start of a longer value such as
    /// `Text("a").with_x(1)`. Besides that, the errors [`Refactorer::wrap`] can return.
    pub fn unwrap<D: Document + ?Sized>(
        &mut self,
        document: &mut D,
    ) -> Result<Applied, RefactorError> {
        let span = self.target(document)?;
        let wrapped = document.text_in(span).ok_or(RefactorError::NoTarget)?;
        let target = locate_unwrap_target(&mut self.parser, wrapped)
            .ok_or(RefactorError::AmbiguousUnwrap)?;

        // The call at the start of the value must be the whole value, or the rest would be lost.
        let expected = target.span.shifted(span.start);
        let content_span = resolve_call_at(document, expected.start)
            .filter(|content| *content == expected)
            .ok_or(RefactorError::AmbiguousUnwrap)?;
        debug!(?span, ?target, ?content_span, "re-resolved wrapper content");

        let content = document
            .text_in(content_span)
            .ok_or(RefactorError::AmbiguousUnwrap)?;
        let replacement = dedent(content, &document.indentation().unit(), target.kind);
        let selection = TextSpan::new(span.start, span.start + replacement.len());
        commit(document, span, replacement, selection)
    }
}

/// Builds the wrapper text for `span` with the indentation found in `document`.
///
/// # Errors
///
/// Returns [`RefactorError::NoTarget`] if `span` does not fit the document.
pub fn wrap_span<D: Document + ?Sized>(
    document: &D,
    span: TextSpan,
    kind: WrapKind,
    wrapper: &str,
) -> Result<String, RefactorError> {
    let text = document.text_in(span).ok_or(RefactorError::NoTarget)?;
    let indent = IndentationContext::at(document, span.start);
    Ok(wrap(kind, text, wrapper, &indent))
}

/// Applies the single edit of a command and moves the selection.
fn commit<D: Document + ?Sized>(
    document: &mut D,
    span: TextSpan,
    replacement: String,
    selection: TextSpan,
) -> Result<Applied, RefactorError> {
    if !document.apply_edit(span, &replacement) {
        return Err(RefactorError::EditRejected);
    }
    document.set_selection(selection);
    info!(?span, ?selection, "applied edit");
    Ok(Applied {
        span,
        replacement,
        selection,
    })
}

#[cfg(test)]
#[path = "tests/refactor.rs"]
mod tests;
