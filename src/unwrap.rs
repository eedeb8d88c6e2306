//! Locating the wrapped expression inside a wrapper call.
//!
//! The wrapper text is parsed and its call arguments are visited in pre-order. The first
//! argument met fixes the depth, positional or keyword, and only keyword arguments at that depth
//! are examined, so keyword arguments of nested calls passed as other argument values are
//! ignored. The span reported is used to seed a re-resolution: the caller resolves the call at
//! its start and only proceeds if that call covers the whole value, then strips the indentation
//! the wrapper added.

use crate::depth::{depth_of, DepthLock};
use crate::parse::{NodeKinds, SourceParser};
use crate::span::TextSpan;
use crate::wrap::WrapKind;
use serde::Serialize;
use streaming_iterator::StreamingIterator;
use tracing::debug;
use tree_sitter::{Node, QueryCursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Where the wrapped expression lies, relative to the wrapper text, and how it was wrapped.
pub struct UnwrapTarget {
    /// Byte range of the `content=` value or the sole `controls` element.
    pub span: TextSpan,
    /// Which keyword argument held it.
    pub kind: WrapKind,
}

/// Accumulates the first usable keyword argument at the locked depth.
struct ArgumentScan<'p> {
    kinds: &'p NodeKinds,
    source: &'p [u8],
    lock: DepthLock,
    target: Option<UnwrapTarget>,
}

impl<'p> ArgumentScan<'p> {
    fn new(kinds: &'p NodeKinds, source: &'p [u8]) -> Self {
        Self {
            kinds,
            source,
            lock: DepthLock::new(),
            target: None,
        }
    }

    fn visit(&mut self, argument: Node<'_>) {
        if argument.kind() == self.kinds.comment {
            return;
        }
        if !self.lock.admits(depth_of(argument))
            || self.target.is_some()
            || argument.kind() != self.kinds.keyword_argument
        {
            return;
        }
        let (Some(name), Some(value)) = (
            argument.child_by_field_name("name"),
            argument.child_by_field_name("value"),
        ) else {
            return;
        };

        match name.utf8_text(self.source).unwrap_or("") {
            "content" => self.target = Some(target_of(value, WrapKind::Content)),
            "controls" => match self.sole_element(value) {
                Some(element) => self.target = Some(target_of(element, WrapKind::Controls)),
                None => debug!("controls list does not hold exactly one element"),
            },
            _ => {}
        }
    }

    /// The only element of a list display, if it has exactly one. Comments do not count.
    fn sole_element<'t>(&self, value: Node<'t>) -> Option<Node<'t>> {
        if value.kind() != self.kinds.list {
            return None;
        }
        let mut cursor = value.walk();
        let mut elements = value
            .named_children(&mut cursor)
            .filter(|child| child.kind() != self.kinds.comment);
        let first = elements.next()?;
        elements.next().is_none().then_some(first)
    }
}

fn target_of(node: Node<'_>, kind: WrapKind) -> UnwrapTarget {
    UnwrapTarget {
        span: TextSpan::new(node.start_byte(), node.end_byte()),
        kind,
    }
}

/// Finds the content of a wrapper call: the value of `content=`, or the sole element of
/// `controls=[...]`.
///
/// Returns `None` when there is no such argument at the wrapper's argument depth, or when the
/// `controls` list holds zero or several elements.
pub fn locate_unwrap_target(parser: &mut SourceParser, wrapped: &str) -> Option<UnwrapTarget> {
    let tree = parser.parse(wrapped)?;
    let source = wrapped.as_bytes();

    let mut arguments = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(parser.arguments(), tree.root_node(), source);
    while let Some(m) = matches.next() {
        arguments.extend(m.captures.iter().map(|capture| capture.node));
    }
    // Pre-order: an enclosing argument starts no later than the ones nested in its value.
    arguments.sort_by_key(|argument| (argument.start_byte(), depth_of(*argument)));

    let mut scan = ArgumentScan::new(parser.kinds(), source);
    for argument in arguments {
        scan.visit(argument);
    }
    debug!(located = ?scan.target, depth = ?scan.lock.depth(), "located unwrap target");
    scan.target
}

#[must_use]
/// Removes the indentation a wrap of `kind` added: one `unit` per level, from every line that
/// starts with it.
pub fn dedent(text: &str, unit: &str, kind: WrapKind) -> String {
    let prefix = unit.repeat(kind.levels());
    text.split('\n')
        .map(|line| line.strip_prefix(prefix.as_str()).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/unwrap.rs"]
mod tests;
