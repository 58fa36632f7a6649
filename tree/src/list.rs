use std::iter::FusedIterator;

use crate::{Composite, Leaf, Node};

/// The line emitted in place of the children of a composite that has none.
pub const EMPTY_MARKER: &str = "Empty Directory";

enum Step<'a> {
    Line(&'a str),
    Node(&'a Node),
    Composite(&'a Composite),
}

/// A depth-first, pre-order listing of a tree.
///
/// Every visited node contributes its name as one line, and every composite
/// without children contributes the marker line right after its name.
/// Pending work is kept on an explicit stack, so arbitrarily deep trees can
/// be listed without growing the call stack.
pub struct List<'a> {
    stack: Vec<Step<'a>>,
    marker: &'a str,
}

impl<'a> List<'a> {
    pub(crate) fn new(node: &'a Node, marker: &'a str) -> Self {
        Self {
            stack: vec![Step::Node(node)],
            marker,
        }
    }

    pub(crate) fn leaf(leaf: &'a Leaf) -> Self {
        Self {
            stack: vec![Step::Line(leaf.name().as_str())],
            marker: EMPTY_MARKER,
        }
    }

    pub(crate) fn composite(composite: &'a Composite, marker: &'a str) -> Self {
        Self {
            stack: vec![Step::Composite(composite)],
            marker,
        }
    }

    /// Schedules the children of `composite` (or the marker) and returns its
    /// own name.
    fn descend(&mut self, composite: &'a Composite) -> &'a str {
        if composite.is_empty() {
            self.stack.push(Step::Line(self.marker));
        } else {
            // pushed in reverse, so the first child is popped first.
            self.stack.extend(composite.children().rev().map(Step::Node));
        }
        composite.name().as_str()
    }
}

impl<'a> Iterator for List<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        Some(match self.stack.pop()? {
            Step::Line(line) => line,
            Step::Node(Node::Leaf(leaf)) => leaf.name().as_str(),
            Step::Node(Node::Composite(composite)) | Step::Composite(composite) => {
                self.descend(composite)
            }
        })
    }
}

impl FusedIterator for List<'_> {}

#[cfg(test)]
mod tests {
    use crate::fixtures::{FIRST_DIRECTORY, FIRST_FILE, NESTED_DIRECTORY, SECOND_DIRECTORY};
    use crate::{Composite, Leaf, Node};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::leaf(&*FIRST_FILE, &["firstFile"])]
    #[case::empty_composite(&*SECOND_DIRECTORY, &["2ndDirectory", "Empty Directory"])]
    #[case::flat(
        &*FIRST_DIRECTORY,
        &["firstDirectory", "secondFile", "thirdFile", "2ndDirectory", "Empty Directory"]
    )]
    #[case::nested(
        &*NESTED_DIRECTORY,
        &[
            "root",
            "docs",
            "readme",
            "drafts",
            "Empty Directory",
            "notes",
            "src",
            "main",
            "lib",
        ]
    )]
    fn list(#[case] node: &Node, #[case] expected: &[&str]) {
        assert_eq!(expected, node.list().collect::<Vec<_>>());
    }

    #[test]
    fn first_directory_with_empty_children() {
        let dir = Composite::new("firstDirectory").unwrap();
        assert_eq!(
            vec!["firstDirectory", "Empty Directory"],
            dir.list().collect::<Vec<_>>()
        );
    }

    #[test]
    fn custom_marker() {
        let marker = String::from("(empty)");
        assert_eq!(
            vec![
                "firstDirectory",
                "secondFile",
                "thirdFile",
                "2ndDirectory",
                "(empty)"
            ],
            FIRST_DIRECTORY.list_with_marker(&marker).collect::<Vec<_>>()
        );
    }

    #[test]
    fn composite_list_matches_node_list() {
        let composite = FIRST_DIRECTORY.as_composite().unwrap();
        assert!(composite.list().eq(FIRST_DIRECTORY.list()));
        assert!(composite
            .list_with_marker("-")
            .eq(FIRST_DIRECTORY.list_with_marker("-")));
    }

    #[test]
    fn fused() {
        let mut list = FIRST_FILE.list();
        assert_eq!(Some("firstFile"), list.next());
        assert_eq!(None, list.next());
        assert_eq!(None, list.next());
    }

    /// Builds a chain far deeper than the default thread stack could
    /// recurse through.
    #[test]
    fn deep_tree() {
        const DEPTH: usize = 100_000;

        let mut node: Node = Leaf::new("bottom").unwrap().into();
        for _ in 0..DEPTH {
            node = Composite::new("level").unwrap().with_child(node).into();
        }

        let mut lines = 0;
        let mut last = "";
        for line in node.list() {
            lines += 1;
            last = line;
        }
        assert_eq!(DEPTH + 1, lines);
        assert_eq!("bottom", last);

        drop(node);
    }
}
