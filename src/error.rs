//! Outcomes that stop a refactor before any edit is made.
//!
//! None of these are fatal: the caller reports the message and leaves the document untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why a refactor was refused.
pub enum RefactorError {
    /// No call expression or trusted selection at the cursor.
    #[error("no call expression found at the cursor")]
    NoTarget,
    /// The selection spans several expressions and at least one of them is incomplete.
    #[error("selection spans several expressions but at least one is malformed")]
    Malformed,
    /// A wrapper was resolved but its content cannot be determined unambiguously.
    #[error("cannot find content: expected `content=` or a single-element `controls=[...]`")]
    AmbiguousUnwrap,
    /// The host refused to apply the computed edit.
    #[error("the edit could not be applied to the document")]
    EditRejected,
    /// The grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Grammar(String),
}
