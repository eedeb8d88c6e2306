//! The editor-facing side of a refactor: text access, selection, and edit application.
//!
//! The refactor logic never owns a document. It reads the current text and selection through
//! [`Document`] at the start of a command and writes back one edit at the end. [`Buffer`] is the
//! in-memory implementation used by the command-line host and the tests.

use crate::span::{line_end, line_start, TextSpan};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The host's indentation setting: spaces of a given width, or tabs.
pub struct IndentationPreference {
    /// Indent with spaces rather than tabs.
    pub uses_spaces: bool,
    /// Spaces per level when `uses_spaces` is set.
    pub width: usize,
}

impl Default for IndentationPreference {
    fn default() -> Self {
        Self {
            uses_spaces: true,
            width: 4,
        }
    }
}

impl IndentationPreference {
    #[must_use]
    /// The string making up one indentation level.
    pub fn unit(&self) -> String {
        if self.uses_spaces {
            " ".repeat(self.width)
        } else {
            "\t".to_string()
        }
    }
}

/// A text buffer the refactors read from and write one edit back to.
pub trait Document {
    /// The whole current text.
    fn text(&self) -> &str;

    /// How the host indents this document.
    fn indentation(&self) -> IndentationPreference;

    /// The current selection; empty for a bare cursor.
    fn selection(&self) -> TextSpan;

    /// Replaces `span` with `new_text` in one step. Returns false if the edit was refused.
    fn apply_edit(&mut self, span: TextSpan, new_text: &str) -> bool;

    /// Moves the selection, in offsets of the current text.
    fn set_selection(&mut self, span: TextSpan);

    #[must_use]
    /// The text under `span`, or `None` if it does not fit the document.
    fn text_in(&self, span: TextSpan) -> Option<&str> {
        span.slice(self.text())
    }

    #[must_use]
    /// Raw text of the line holding `offset`, without its line break.
    fn line_containing(&self, offset: usize) -> &str {
        let text = self.text();
        &text[line_start(text, offset)..line_end(text, offset)]
    }

    #[must_use]
    /// Finds a match of `pattern` on the line of `offset` that touches `offset`.
    ///
    /// A match the offset falls strictly inside wins over one that merely ends at it, so a
    /// cursor at the start of `Text` in `Row(Text(` picks `Text(`.
    fn find_word_touching(&self, offset: usize, pattern: &Regex) -> Option<TextSpan> {
        let text = self.text();
        let start = line_start(text, offset);
        let line = &text[start..line_end(text, offset)];

        let mut touching_end = None;
        for found in pattern.find_iter(line) {
            let span = TextSpan::new(start + found.start(), start + found.end());
            if span.start <= offset && offset < span.end {
                return Some(span);
            }
            if span.end == offset {
                touching_end = Some(span);
            }
        }
        touching_end
    }
}

#[derive(Debug, Clone)]
/// A document held in memory with a single selection.
pub struct Buffer {
    text: String,
    selection: TextSpan,
    indentation: IndentationPreference,
}

impl Buffer {
    #[must_use]
    /// A buffer holding `text` with the cursor at its start.
    pub fn new(text: impl Into<String>, indentation: IndentationPreference) -> Self {
        Self {
            text: text.into(),
            selection: TextSpan::caret(0),
            indentation,
        }
    }

    #[must_use]
    /// Sets the initial selection.
    pub fn with_selection(mut self, selection: TextSpan) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    /// Gives back the edited text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Document for Buffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn indentation(&self) -> IndentationPreference {
        self.indentation
    }

    fn selection(&self) -> TextSpan {
        self.selection
    }

    fn apply_edit(&mut self, span: TextSpan, new_text: &str) -> bool {
        if !span.is_valid_for(&self.text) {
            return false;
        }
        self.text.replace_range(span.start..span.end, new_text);
        true
    }

    fn set_selection(&mut self, span: TextSpan) {
        self.selection = span;
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
