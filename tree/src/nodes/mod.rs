//! This holds types describing nodes in a resource tree.
mod composite;
mod leaf;

use std::fmt;

use crate::{List, Name, EMPTY_MARKER};
pub use composite::Composite;
pub use leaf::Leaf;

/// A Node is either a [Leaf] or a [Composite].
/// Ownership is strictly parent-to-child: a node moved into a [Composite]
/// can't be reachable from anywhere else, which keeps every tree of owned
/// nodes acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A terminal resource.
    Leaf(Leaf),
    /// A resource holding an ordered sequence of other nodes.
    Composite(Composite),
}

impl Node {
    pub fn name(&self) -> &Name {
        match self {
            Node::Leaf(leaf) => leaf.name(),
            Node::Composite(composite) => composite.name(),
        }
    }

    /// Replaces the display name. This has no structural effect.
    pub fn rename(&mut self, name: Name) {
        match self {
            Node::Leaf(leaf) => leaf.rename(name),
            Node::Composite(composite) => composite.rename(name),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Composite(_))
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Node::Composite(composite) => Some(composite),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            Node::Composite(composite) => Some(composite),
            Node::Leaf(_) => None,
        }
    }

    /// The number of nodes in this subtree, including the node itself.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Composite(composite) => {
                1 + composite.children().map(Node::node_count).sum::<usize>()
            }
        }
    }

    /// Lists this node: its own name, followed by the listing of each
    /// child in order, or [EMPTY_MARKER] for a composite without children.
    pub fn list(&self) -> List<'_> {
        List::new(self, EMPTY_MARKER)
    }

    /// Like [Node::list], but emits `marker` for composites without children.
    pub fn list_with_marker<'a>(&'a self, marker: &'a str) -> List<'a> {
        List::new(self, marker)
    }
}

impl From<Leaf> for Node {
    fn from(value: Leaf) -> Self {
        Node::Leaf(value)
    }
}

impl From<Composite> for Node {
    fn from(value: Composite) -> Self {
        Node::Composite(value)
    }
}

/// Writes the listing, one line per entry.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.list() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
