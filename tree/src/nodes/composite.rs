use std::mem;

use crate::{ConstructionError, List, Name, Node, EMPTY_MARKER};

/// A Composite holds an ordered sequence of [Node]s, leaves and composites
/// alike. Insertion order is preserved, and children with the same name are
/// kept side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    name: Name,
    children: Vec<Node>,
}

impl Composite {
    /// Creates a composite without children.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ConstructionError> {
        Ok(Self {
            name: name.as_ref().try_into()?,
            children: vec![],
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn rename(&mut self, name: Name) {
        self.name = name;
    }

    /// Appends `child` to the end of the sequence.
    /// Returns the composite itself, so calls can be chained.
    pub fn add(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Consuming variant of [Composite::add], for building a tree in a single
    /// expression.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add(child);
        self
    }

    /// Replaces the entire sequence of children in one go, returning the
    /// previous one.
    pub fn set_children(&mut self, children: impl IntoIterator<Item = Node>) -> Vec<Node> {
        let children = children.into_iter().collect();
        mem::replace(&mut self.children, children)
    }

    /// Removes all children, returning them.
    pub fn take_children(&mut self) -> Vec<Node> {
        mem::take(&mut self.children)
    }

    /// Removes the child at `index`, shifting all later children one
    /// position to the front. Returns [None] if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Removes the first child called `name`.
    pub fn remove_named(&mut self, name: &str) -> Option<Node> {
        let pos = self.children.iter().position(|n| n.name() == name)?;
        Some(self.children.remove(pos))
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Allows iterating over the children, in insertion order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> + ExactSizeIterator + '_ {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn list(&self) -> List<'_> {
        List::composite(self, EMPTY_MARKER)
    }

    pub fn list_with_marker<'a>(&'a self, marker: &'a str) -> List<'a> {
        List::composite(self, marker)
    }
}

impl From<Name> for Composite {
    fn from(name: Name) -> Self {
        Self {
            name,
            children: vec![],
        }
    }
}

/// Drops the subtree iteratively, so deep trees don't exhaust the stack.
impl Drop for Composite {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Composite(mut composite) = node {
                pending.append(&mut composite.children);
            }
        }
    }
}
