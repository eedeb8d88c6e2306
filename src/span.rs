//! Byte spans and line/column positions within a source text.
//!
//! Every span is derived from the current text and recomputed after each edit; nothing here is
//! cached across edits. Offsets are byte offsets, matching what tree-sitter and `regex` report.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Half-open byte range `[start, end)` into a source text.
pub struct TextSpan {
    /// First byte covered by the span.
    pub start: usize,
    /// Byte just past the end of the span.
    pub end: usize,
}

impl TextSpan {
    #[must_use]
    /// Builds a span, swapping the bounds if they arrive reversed.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    #[must_use]
    /// Zero-width span at `offset`, the shape of a bare cursor.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[must_use]
    /// True for a bare cursor.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    /// True when `offset` lies inside the span or on either of its ends.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    #[must_use]
    /// Moves a span found inside a fragment into the coordinates of the enclosing text.
    pub fn shifted(&self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }

    #[must_use]
    /// Whether the span fits inside `text` on UTF-8 character boundaries.
    pub fn is_valid_for(&self, text: &str) -> bool {
        self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }

    #[must_use]
    /// Borrows the spanned slice, or `None` if the span does not fit the text.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        if self.is_valid_for(text) {
            Some(&text[self.start..self.end])
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Line and column of a byte offset, both 1-indexed with the column counted in bytes.
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Byte column within the line, starting at 1.
    pub column: usize,
}

impl Position {
    #[must_use]
    /// Locates the line and column of `offset`, clamping past-the-end offsets to the text end.
    pub fn of_offset(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let before = &text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line,
            column: offset - line_start + 1,
        }
    }

    #[must_use]
    /// Converts back to a byte offset, or `None` if the line or column lies outside the text.
    ///
    /// A column one past the final character of a line addresses the line end.
    pub fn to_offset(self, text: &str) -> Option<usize> {
        if self.line == 0 || self.column == 0 {
            return None;
        }
        let line_start = if self.line == 1 {
            0
        } else {
            text.match_indices('\n').nth(self.line - 2).map(|(i, _)| i + 1)?
        };
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |i| line_start + i);
        let offset = line_start + self.column - 1;
        (offset <= line_end && text.is_char_boundary(offset)).then_some(offset)
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    /// Parses `LINE:COL`, the format used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, column) = s
            .split_once(':')
            .ok_or_else(|| format!("expected LINE:COL, got {s:?}"))?;
        let line = line
            .trim()
            .parse()
            .map_err(|e| format!("invalid line in {s:?}: {e}"))?;
        let column = column
            .trim()
            .parse()
            .map_err(|e| format!("invalid column in {s:?}: {e}"))?;
        Ok(Self { line, column })
    }
}

#[must_use]
/// Byte offset where the line holding `offset` begins.
pub fn line_start(text: &str, offset: usize) -> usize {
    text[..offset.min(text.len())].rfind('\n').map_or(0, |i| i + 1)
}

#[must_use]
/// Byte offset of the newline ending the line that holds `offset`, or the text end.
pub fn line_end(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    text[offset..].find('\n').map_or(text.len(), |i| offset + i)
}

#[cfg(test)]
#[path = "tests/span.rs"]
mod tests;
