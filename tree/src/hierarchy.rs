use std::{collections::HashSet, fmt, mem};

use tracing::{debug, instrument, Level};

use crate::{Composite, Error, Leaf, Name, Node, EMPTY_MARKER};

/// A handle to a node inside a [Hierarchy].
/// Only meaningful for the hierarchy that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum Kind {
    Leaf,
    Composite(Vec<NodeId>),
}

#[derive(Debug, Clone)]
struct Slot {
    name: Name,
    kind: Kind,
    /// Only used for the ownership and cycle checks, never handed out.
    parent: Option<NodeId>,
}

/// An arena of nodes addressed by [NodeId] handles.
///
/// Unlike owned [Node] values, handles can be passed around freely, so it's
/// possible to ask for a node to be added twice, or below one of its own
/// descendants. Such requests are rejected with an [Error], leaving the
/// hierarchy as it was: every node has at most one parent, and the graph
/// stays acyclic.
///
/// All nodes live as long as the hierarchy; detaching a node turns it into
/// another root. [Hierarchy::snapshot] produces an owned copy of a subtree.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    slots: Vec<Slot>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, unattached leaf.
    pub fn leaf(&mut self, name: impl AsRef<str>) -> Result<NodeId, Error> {
        let name: Name = name.as_ref().try_into()?;
        Ok(self.insert(name, Kind::Leaf))
    }

    /// Creates a new, unattached composite without children.
    pub fn composite(&mut self, name: impl AsRef<str>) -> Result<NodeId, Error> {
        let name: Name = name.as_ref().try_into()?;
        Ok(self.insert(name, Kind::Composite(vec![])))
    }

    /// Copies an owned tree into the hierarchy, returning the handle of its
    /// (unattached) root.
    pub fn import(&mut self, node: &Node) -> NodeId {
        let root = NodeId(self.slots.len());

        // nodes still to be copied, along with the parent they go below.
        let mut pending: Vec<(&Node, Option<NodeId>)> = vec![(node, None)];
        while let Some((node, parent)) = pending.pop() {
            let id = match node {
                Node::Leaf(leaf) => self.insert(leaf.name().clone(), Kind::Leaf),
                Node::Composite(composite) => {
                    let id = self.insert(composite.name().clone(), Kind::Composite(vec![]));
                    pending.extend(composite.children().rev().map(|child| (child, Some(id))));
                    id
                }
            };

            if let Some(parent) = parent {
                if let Kind::Composite(children) = &mut self.slots[parent.0].kind {
                    children.push(id);
                }
                self.slots[id.0].parent = Some(parent);
            }
        }

        root
    }

    fn insert(&mut self, name: Name, kind: Kind) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            name,
            kind,
            parent: None,
        });
        id
    }

    fn slot(&self, id: NodeId) -> Result<&Slot, Error> {
        self.slots.get(id.0).ok_or(Error::UnknownNode(id))
    }

    /// The number of nodes in the hierarchy, attached or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn name(&self, id: NodeId) -> Result<&Name, Error> {
        Ok(&self.slot(id)?.name)
    }

    pub fn rename(&mut self, id: NodeId, name: Name) -> Result<(), Error> {
        self.slot(id)?;
        self.slots[id.0].name = name;
        Ok(())
    }

    pub fn is_composite(&self, id: NodeId) -> Result<bool, Error> {
        Ok(matches!(self.slot(id)?.kind, Kind::Composite(_)))
    }

    /// The children of `id`, in order. Leaves have none.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId], Error> {
        let children: &[NodeId] = match &self.slot(id)?.kind {
            Kind::Leaf => &[],
            Kind::Composite(children) => children,
        };
        Ok(children)
    }

    /// Whether `ancestor` is `node` itself, or reachable by walking up from it.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.slots[id.0].parent;
        }
        false
    }

    /// Checks whether `child` may be placed below `parent`.
    /// A child already placed below `parent` is fine if `reattach` is set.
    fn check_attach(&self, parent: NodeId, child: NodeId, reattach: bool) -> Result<(), Error> {
        let parent_slot = self.slot(parent)?;
        let child_slot = self.slot(child)?;

        if let Kind::Leaf = parent_slot.kind {
            return Err(Error::NotAComposite(parent_slot.name.clone()));
        }

        if self.is_ancestor_or_self(child, parent) {
            return Err(Error::Cycle {
                parent: parent_slot.name.clone(),
                child: child_slot.name.clone(),
            });
        }

        match child_slot.parent {
            Some(p) if reattach && p == parent => Ok(()),
            Some(_) => Err(Error::AlreadyAttached(child_slot.name.clone())),
            None => Ok(()),
        }
    }

    /// Appends `child` to the children of `parent`.
    /// Returns the hierarchy itself, so calls can be chained.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> Result<&mut Self, Error> {
        self.append(parent, child)?;
        Ok(self)
    }

    #[instrument(level = "debug", skip(self), err(level = Level::WARN))]
    fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        self.check_attach(parent, child, false)?;

        if let Kind::Composite(children) = &mut self.slots[parent.0].kind {
            children.push(child);
        }
        self.slots[child.0].parent = Some(parent);

        debug!("child added");
        Ok(())
    }

    /// Replaces the children of `parent` with `children`, returning the
    /// previous ones.
    ///
    /// The new sequence is validated as a whole before anything changes: on
    /// error no node is moved. Children of `parent` may appear in the new
    /// sequence again (to reorder them), every other node must be
    /// unattached. Previous children that aren't part of the new sequence
    /// become roots.
    #[instrument(level = "debug", skip(self, children), err(level = Level::WARN))]
    pub fn set_children(
        &mut self,
        parent: NodeId,
        children: impl IntoIterator<Item = NodeId>,
    ) -> Result<Vec<NodeId>, Error> {
        let children: Vec<NodeId> = children.into_iter().collect();

        self.check_children(parent, &children)?;

        let previous = match &mut self.slots[parent.0].kind {
            Kind::Composite(current) => mem::replace(current, children.clone()),
            Kind::Leaf => unreachable!("parent was checked to be a composite"),
        };
        for old in &previous {
            self.slots[old.0].parent = None;
        }
        for new in &children {
            self.slots[new.0].parent = Some(parent);
        }

        debug!(count = children.len(), "children replaced");
        Ok(previous)
    }

    fn check_children(&self, parent: NodeId, children: &[NodeId]) -> Result<(), Error> {
        let parent_slot = self.slot(parent)?;
        if let Kind::Leaf = parent_slot.kind {
            return Err(Error::NotAComposite(parent_slot.name.clone()));
        }

        let mut seen = HashSet::with_capacity(children.len());
        for &child in children {
            self.check_attach(parent, child, true)?;
            if !seen.insert(child) {
                return Err(Error::DuplicateChild(self.slots[child.0].name.clone()));
            }
        }
        Ok(())
    }

    /// Removes `child` from its parent, turning it into a root.
    /// Returns whether it had a parent.
    #[instrument(level = "debug", skip(self), err(level = Level::WARN))]
    pub fn detach(&mut self, child: NodeId) -> Result<bool, Error> {
        let Some(parent) = self.slot(child)?.parent else {
            return Ok(false);
        };

        if let Kind::Composite(children) = &mut self.slots[parent.0].kind {
            children.retain(|&c| c != child);
        }
        self.slots[child.0].parent = None;

        debug!("child detached");
        Ok(true)
    }

    /// Produces an owned copy of the subtree below `id`.
    pub fn snapshot(&self, id: NodeId) -> Result<Node, Error> {
        enum Step {
            Enter(NodeId),
            /// All children of the composite are on top of `done`.
            Leave(NodeId),
        }

        self.slot(id)?;

        let mut stack = vec![Step::Enter(id)];
        let mut done: Vec<Node> = Vec::new();
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id) => {
                    let slot = &self.slots[id.0];
                    match &slot.kind {
                        Kind::Leaf => done.push(Leaf::from(slot.name.clone()).into()),
                        Kind::Composite(children) => {
                            stack.push(Step::Leave(id));
                            stack.extend(children.iter().rev().map(|&c| Step::Enter(c)));
                        }
                    }
                }
                Step::Leave(id) => {
                    let slot = &self.slots[id.0];
                    let count = match &slot.kind {
                        Kind::Composite(children) => children.len(),
                        Kind::Leaf => unreachable!("only composites are left"),
                    };
                    let mut composite = Composite::from(slot.name.clone());
                    composite.set_children(done.drain(done.len() - count..));
                    done.push(composite.into());
                }
            }
        }

        match done.pop() {
            Some(node) => Ok(node),
            None => unreachable!("the root is always built"),
        }
    }

    /// Lists the subtree below `id`, see [Node::list].
    pub fn list(&self, id: NodeId) -> Result<Vec<String>, Error> {
        self.list_with_marker(id, EMPTY_MARKER)
    }

    /// Like [Hierarchy::list], but emits `marker` for composites without
    /// children.
    pub fn list_with_marker(&self, id: NodeId, marker: &str) -> Result<Vec<String>, Error> {
        enum Step<'a> {
            Line(&'a str),
            Node(NodeId),
        }

        self.slot(id)?;

        let mut lines = Vec::new();
        let mut stack = vec![Step::Node(id)];
        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Line(line) => {
                    lines.push(line.to_owned());
                    continue;
                }
                Step::Node(id) => id,
            };

            let slot = &self.slots[id.0];
            lines.push(slot.name.to_string());
            match &slot.kind {
                Kind::Leaf => {}
                Kind::Composite(children) if children.is_empty() => stack.push(Step::Line(marker)),
                // pushed in reverse, so the first child is popped first.
                Kind::Composite(children) => {
                    stack.extend(children.iter().rev().map(|&c| Step::Node(c)))
                }
            }
        }

        Ok(lines)
    }
}
