//! rewrap: structural wrap/unwrap refactors for Python call expressions.
//!
//! The library resolves the call expression (or group of sibling calls) under a cursor or
//! selection, then rewrites it inside a `content=` or `controls=[...]` wrapper call, or hoists
//! the wrapped content back out. Parsing is delegated to tree-sitter through the [`grammar`]
//! module so that the range logic stays independent of the subject language.
#![allow(clippy::multiple_crate_versions)]

pub mod classify;
pub mod config;
pub mod depth;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod grammar;
pub mod parse;
pub mod refactor;
pub mod resolve;
pub mod scanner;
pub mod span;
pub mod unwrap;
pub mod wrap;
