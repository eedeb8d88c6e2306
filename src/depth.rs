//! Depth locking for tree traversals.
//!
//! Both the classifier and the unwrap locator only consider nodes at the depth of the first
//! match they meet, so that nested calls inside arguments are not mistaken for top-level ones.
//! The lock is an explicit accumulator threaded through the traversal.

use tree_sitter::Node;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Remembers the depth of the first admitted node and admits only nodes at that depth.
pub struct DepthLock {
    locked: Option<usize>,
}

impl DepthLock {
    #[must_use]
    /// An unlocked lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a node at `depth`, locking onto it if this is the first node offered.
    pub fn admits(&mut self, depth: usize) -> bool {
        match self.locked {
            None => {
                self.locked = Some(depth);
                true
            }
            Some(locked) => locked == depth,
        }
    }

    #[must_use]
    /// Depth the lock settled on, if any node has been admitted yet.
    pub fn depth(&self) -> Option<usize> {
        self.locked
    }
}

#[must_use]
/// Distance from the root of the tree to `node`.
pub fn depth_of(node: Node<'_>) -> usize {
    let mut depth = 0;
    let mut current = node;
    while let Some(parent) = current.parent() {
        depth += 1;
        current = parent;
    }
    depth
}

#[cfg(test)]
#[path = "tests/depth.rs"]
mod tests;
