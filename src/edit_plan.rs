//! The edit plan records refactors as byte-range replacements and applies them with textum.
//!
//! A command can either apply its edit straight away or emit it as JSON for another tool (or a
//! later `rewrap apply-plan`) to apply. Each edit carries the selection the host should set
//! afterwards, so a wrap can still leave the wrapper name selected for renaming.

use crate::span::TextSpan;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, io};
use textum::{Boundary, BoundaryMode, Patch, PatchSet, Snippet, Target};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Serialisable collection of file modifications for batch application.
pub struct EditPlan {
    /// Individual replacements, applied per file.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One replacement of a byte range in a file.
pub struct Edit {
    /// Target file path for this modification.
    pub file_name: String,
    /// The refactor that produced this edit.
    pub action: String,
    /// First byte replaced.
    pub byte_start: usize,
    /// Byte just past the replaced range.
    pub byte_end: usize,
    /// Text inserted in place of the range.
    pub replacement: String,
    /// Selection to set once the edit is applied, in post-edit offsets.
    pub selection: TextSpan,
}

impl Edit {
    #[must_use]
    /// The replaced byte range.
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.byte_start, self.byte_end)
    }
}

impl EditPlan {
    /// Apply all edits in the plan using textum patches.
    ///
    /// Groups edits by file, checks them against the file's current content, and applies each
    /// file's `PatchSet` in one go.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or written, if its edits overlap or fall
    /// outside the file, or if patching fails.
    pub fn apply(&self) -> io::Result<()> {
        let mut file_groups: HashMap<&str, Vec<&Edit>> = HashMap::new();

        for edit in &self.edits {
            file_groups
                .entry(edit.file_name.as_str())
                .or_default()
                .push(edit);
        }

        for (file_name, edits) in file_groups {
            let content = fs::read_to_string(file_name)?;
            let patchset = patch_set(file_name, &content, &edits)?;

            let results = patchset
                .apply_to_files()
                .map_err(|e| io::Error::other(e.to_string()))?;

            if let Some(new_content) = results.get(file_name) {
                fs::write(file_name, new_content)?;
            }
        }

        Ok(())
    }
}

/// Builds the textum patches for one file's `edits`, given the file's current `content`.
///
/// Byte offsets become character targets. An edit reaching the end of the file replaces
/// everything from its start onwards.
///
/// # Errors
///
/// Returns `InvalidData` if an edit falls outside `content`, splits a character, or overlaps
/// another edit.
pub fn patch_set(file_name: &str, content: &str, edits: &[&Edit]) -> io::Result<PatchSet> {
    let invalid = |message: String| io::Error::new(io::ErrorKind::InvalidData, message);

    let mut spans = Vec::with_capacity(edits.len());
    for edit in edits {
        let span = edit.span();
        if !span.is_valid_for(content) {
            return Err(invalid(format!(
                "edit {}..{} is outside {file_name}",
                span.start, span.end
            )));
        }
        spans.push(span);
    }
    spans.sort_by_key(|span| span.start);
    if let Some(pair) = spans.windows(2).find(|pair| pair[0].end > pair[1].start) {
        return Err(invalid(format!(
            "edits {}..{} and {}..{} overlap in {file_name}",
            pair[0].start, pair[0].end, pair[1].start, pair[1].end
        )));
    }

    let total = content.chars().count();
    let mut patchset = PatchSet::new();
    for edit in edits {
        let start = char_index(content, edit.byte_start);
        let end = char_index(content, edit.byte_end);
        let from = Boundary::new(Target::Char(start), BoundaryMode::Include);
        let snippet = if end == total {
            Snippet::From(from)
        } else {
            Snippet::Between {
                start: from,
                end: Boundary::new(Target::Char(end), BoundaryMode::Exclude),
            }
        };

        patchset.add(Patch {
            file: file_name.to_string(),
            snippet,
            replacement: edit.replacement.clone(),
        });
    }

    Ok(patchset)
}

/// Character index of the char boundary at `byte`.
fn char_index(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
