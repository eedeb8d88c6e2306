//! Parser handle shared by the classifier and the unwrap locator.
//!
//! A `SourceParser` is built once from a [`Grammar`] and reused for every fragment parsed during
//! a command. tree-sitter never rejects input: malformed fragments come back as trees carrying
//! `ERROR` and `MISSING` nodes, which the callers inspect.

use crate::error::RefactorError;
use crate::grammar::python::PythonGrammar;
use crate::grammar::Grammar;
use tree_sitter::{Parser, Query, Tree};

/// Node kinds the range logic matches on, copied out of a [`Grammar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeKinds {
    /// Call expressions.
    pub call: String,
    /// List displays.
    pub list: String,
    /// `name=value` arguments.
    pub keyword_argument: String,
    /// Comments.
    pub comment: String,
}

/// A tree-sitter parser bound to one grammar, with that grammar's compiled queries.
pub struct SourceParser {
    parser: Parser,
    kinds: NodeKinds,
    arguments: Query,
}

impl SourceParser {
    /// Loads `grammar` into a fresh tree-sitter parser.
    ///
    /// # Errors
    ///
    /// Returns [`RefactorError::Grammar`] if the grammar was built for an incompatible
    /// tree-sitter ABI or its argument query does not compile.
    pub fn new(grammar: &impl Grammar) -> Result<Self, RefactorError> {
        let language = grammar.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| RefactorError::Grammar(e.to_string()))?;
        let arguments = Query::new(&language, grammar.argument_query())
            .map_err(|e| RefactorError::Grammar(e.to_string()))?;

        Ok(Self {
            parser,
            kinds: NodeKinds {
                call: grammar.call_kind().to_string(),
                list: grammar.list_kind().to_string(),
                keyword_argument: grammar.keyword_argument_kind().to_string(),
                comment: grammar.comment_kind().to_string(),
            },
            arguments,
        })
    }

    /// Parser for Python source, the language the wrapper convention belongs to.
    ///
    /// # Errors
    ///
    /// See [`SourceParser::new`].
    pub fn python() -> Result<Self, RefactorError> {
        Self::new(&PythonGrammar)
    }

    /// Parses `text` from scratch. Returns `None` only if tree-sitter gives up on the input.
    pub fn parse(&mut self, text: &str) -> Option<Tree> {
        self.parser.parse(text, None)
    }

    #[must_use]
    /// Node kinds of the loaded grammar.
    pub fn kinds(&self) -> &NodeKinds {
        &self.kinds
    }

    #[must_use]
    /// Compiled query capturing every call argument as `@argument`.
    pub fn arguments(&self) -> &Query {
        &self.arguments
    }
}
