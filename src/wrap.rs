//! Text builders for wrapping an expression inside a wrapper call.
//!
//! Both builders are pure: they take the extracted text and the indentation around it and
//! return the replacement. Exactly one trailing comma is added, either after the wrapped value
//! or after the wrapper's closing parenthesis, so that the surrounding call keeps whatever
//! trailing-comma convention it already used.

use crate::document::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Which keyword argument of the wrapper call holds the wrapped expression.
pub enum WrapKind {
    /// `content=<expr>`, a single value.
    Content,
    /// `controls=[<expr>, ...]`, a list. Unwrapping requires exactly one element.
    Controls,
}

impl WrapKind {
    #[must_use]
    /// Name of the keyword argument.
    pub fn keyword(self) -> &'static str {
        match self {
            WrapKind::Content => "content",
            WrapKind::Controls => "controls",
        }
    }

    #[must_use]
    /// Indentation levels the wrapped expression sits below the wrapper call.
    pub fn levels(self) -> usize {
        match self {
            WrapKind::Content => 1,
            WrapKind::Controls => 2,
        }
    }
}

impl std::fmt::Display for WrapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Indentation around the expression being rewritten.
pub struct IndentationContext {
    /// Leading whitespace of the line the expression starts on.
    pub base: String,
    /// One indentation level.
    pub unit: String,
}

impl IndentationContext {
    #[must_use]
    /// Context from a base indentation and one level's unit.
    pub fn new(base: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            unit: unit.into(),
        }
    }

    /// Reads the indentation of the line holding `offset` and the document's indent unit.
    #[must_use]
    pub fn at<D: Document + ?Sized>(document: &D, offset: usize) -> Self {
        let line = document.line_containing(offset);
        let base = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
        Self::new(base, document.indentation().unit())
    }
}

/// Returns the comma to append to the wrapped value and the one to append after the wrapper.
fn trailing_commas(text: &str) -> (&'static str, &'static str) {
    if text.ends_with(',') {
        ("", ",")
    } else {
        (",", "")
    }
}

#[must_use]
/// Wraps `text` as the `content=` argument of a `wrapper` call.
pub fn wrap_as_content(text: &str, wrapper: &str, indent: &IndentationContext) -> String {
    let IndentationContext { base, unit } = indent;
    let (value_comma, closing_comma) = trailing_commas(text);
    let body = text.replace('\n', &format!("\n{unit}"));

    format!("{wrapper}(\n{base}{unit}content={body}{value_comma}\n{base}){closing_comma}")
}

#[must_use]
/// Wraps `text` as the sole element of the `controls=[...]` argument of a `wrapper` call.
pub fn wrap_as_controls(text: &str, wrapper: &str, indent: &IndentationContext) -> String {
    let IndentationContext { base, unit } = indent;
    let (element_comma, closing_comma) = trailing_commas(text);
    let body = text.replace('\n', &format!("\n{unit}{unit}"));

    format!(
        "{wrapper}(\n{base}{unit}controls=[\n{base}{unit}{unit}{body}{element_comma}\n{base}{unit}]\n{base}){closing_comma}"
    )
}

#[must_use]
/// Dispatches to the builder for `kind`.
pub fn wrap(kind: WrapKind, text: &str, wrapper: &str, indent: &IndentationContext) -> String {
    match kind {
        WrapKind::Content => wrap_as_content(text, wrapper, indent),
        WrapKind::Controls => wrap_as_controls(text, wrapper, indent),
    }
}

#[cfg(test)]
#[path = "tests/wrap.rs"]
mod tests;
