//! Structure classification of text fragments.
//!
//! A fragment is parsed and its top-level calls are counted: the first call met in a pre-order
//! walk fixes the depth, and only calls at that depth are counted, so `f(g(1))` counts once
//! while `f(1), g(2)` counts twice. Each counted call is also checked for completeness.

use crate::depth::DepthLock;
use crate::parse::SourceParser;
use serde::Serialize;
use tracing::debug;
use tree_sitter::{Node, TreeCursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// How many top-level calls a fragment holds and whether they are all well formed.
pub struct ClassificationResult {
    /// Calls found at the locked depth, well formed or not.
    pub node_count: usize,
    /// False once any counted call is truncated or the fragment contains a parse error.
    pub correct_text: bool,
}

/// Counts calls at the locked depth while walking one tree.
struct CallTally<'p> {
    call_kind: &'p str,
    lock: DepthLock,
    result: ClassificationResult,
}

impl<'p> CallTally<'p> {
    fn new(call_kind: &'p str) -> Self {
        Self {
            call_kind,
            lock: DepthLock::new(),
            result: ClassificationResult {
                node_count: 0,
                correct_text: true,
            },
        }
    }

    fn visit(&mut self, node: Node<'_>, depth: usize) {
        if node.kind() != self.call_kind || !self.lock.admits(depth) {
            return;
        }
        if !is_complete_call(node) {
            self.result.correct_text = false;
        }
        self.result.node_count += 1;
    }

    fn walk(&mut self, cursor: &mut TreeCursor<'_>) {
        let mut depth = 0;
        loop {
            self.visit(cursor.node(), depth);

            if cursor.goto_first_child() {
                depth += 1;
                continue;
            }
            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    return;
                }
                depth -= 1;
            }
        }
    }
}

/// A call is complete when it has both callee and arguments, and the arguments close with a
/// real `)` rather than one tree-sitter invented during error recovery.
fn is_complete_call(node: Node<'_>) -> bool {
    if node.child_count() < 2 || node.has_error() {
        return false;
    }
    let Some(arguments) = node.child_by_field_name("arguments") else {
        return false;
    };
    let mut cursor = arguments.walk();
    let last = arguments.children(&mut cursor).last();
    matches!(last, Some(close) if close.kind() == ")" && !close.is_missing())
}

/// Parses `text` as a fragment and reports its top-level call structure.
///
/// The fragment is framed in parentheses before parsing so that a selection starting mid-line,
/// or continuing onto indented lines, still parses as one expression. Siblings separated by
/// commas then become elements of a single tuple.
pub fn classify(parser: &mut SourceParser, text: &str) -> ClassificationResult {
    let framed = format!("({text}\n)");
    let Some(tree) = parser.parse(&framed) else {
        return ClassificationResult {
            node_count: 0,
            correct_text: false,
        };
    };

    let root = tree.root_node();
    let mut tally = CallTally::new(&parser.kinds().call);
    tally.walk(&mut root.walk());

    let mut result = tally.result;
    if root.has_error() {
        result.correct_text = false;
    }
    debug!(
        node_count = result.node_count,
        correct_text = result.correct_text,
        depth = ?tally.lock.depth(),
        "classified fragment"
    );
    result
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;
