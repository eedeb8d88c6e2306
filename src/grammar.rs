//! Grammar trait and implementations for the languages rewrap can refactor.
//!
//! This module defines the `Grammar` trait, which abstracts the subject language behind a
//! tree-sitter language plus the handful of node kinds and queries the range logic needs. The
//! classifier and unwrap locator only ever talk to this trait.

pub mod python;

/// The node kinds and queries rewrap needs from a tree-sitter grammar.
pub trait Grammar {
    /// The tree-sitter language to load into the parser.
    fn language(&self) -> tree_sitter::Language;
    /// Node kind of a call expression (callee followed by an argument list).
    fn call_kind(&self) -> &str;
    /// Node kind of a list display.
    fn list_kind(&self) -> &str;
    /// Node kind of a `name=value` argument, with `name` and `value` fields.
    fn keyword_argument_kind(&self) -> &str;
    /// Node kind of comments, which never count as list elements.
    fn comment_kind(&self) -> &str;
    /// Query capturing every argument of every call as `@argument`, positional or keyword.
    fn argument_query(&self) -> &str;
}
