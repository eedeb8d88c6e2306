//! Python grammar implementation using tree-sitter-python.

use crate::grammar::Grammar;

/// Node kinds and queries for Python call expressions and their arguments.
pub struct PythonGrammar;

impl Grammar for PythonGrammar {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn call_kind(&self) -> &'static str {
        "call"
    }

    fn list_kind(&self) -> &'static str {
        "list"
    }

    fn keyword_argument_kind(&self) -> &'static str {
        "keyword_argument"
    }

    fn comment_kind(&self) -> &'static str {
        "comment"
    }

    fn argument_query(&self) -> &'static str {
        "(argument_list (_) @argument)"
    }
}
