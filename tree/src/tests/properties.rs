//! Structural properties of listings, checked over arbitrary trees.
use proptest::prelude::*;
use test_strategy::proptest;

use crate::{Composite, Hierarchy, Leaf, Manifest, Name, Node, EMPTY_MARKER};

fn arb_name() -> impl Strategy<Value = Name> {
    "[a-zA-Z0-9_. -]{1,12}".prop_map(|s| Name::try_from(s).expect("strategy yields valid names"))
}

fn arb_node() -> impl Strategy<Value = Node> {
    let terminal = prop_oneof![
        arb_name().prop_map(|name| Node::from(Leaf::from(name))),
        arb_name().prop_map(|name| Node::from(Composite::from(name))),
    ];

    terminal.prop_recursive(5, 64, 6, |inner| {
        (arb_name(), prop::collection::vec(inner, 0..6)).prop_map(|(name, children)| {
            let mut composite = Composite::from(name);
            composite.set_children(children);
            composite.into()
        })
    })
}

/// The number of lines a listing of `node` is expected to have.
fn expected_lines(node: &Node) -> usize {
    match node {
        Node::Leaf(_) => 1,
        Node::Composite(c) if c.is_empty() => 2,
        Node::Composite(c) => 1 + c.children().map(expected_lines).sum::<usize>(),
    }
}

/// Checks that the listing of every composite is its own name, followed by
/// the listings of its children back to back, in order.
fn assert_blocks(node: &Node) {
    let lines: Vec<&str> = node.list().collect();
    assert_eq!(node.name().as_str(), lines[0]);

    if let Node::Composite(c) = node {
        let mut offset = 1;
        for child in c.children() {
            let block: Vec<&str> = child.list().collect();
            assert_eq!(&lines[offset..offset + block.len()], block.as_slice());
            offset += block.len();
            assert_blocks(child);
        }
        if c.is_empty() {
            offset += 1;
        }
        assert_eq!(lines.len(), offset);
    }
}

#[proptest]
fn leaf_lists_its_name(#[strategy(arb_name())] name: Name) {
    let leaf = Leaf::from(name.clone());
    assert_eq!(vec![name.as_str()], leaf.list().collect::<Vec<_>>());
}

#[proptest]
fn line_count(#[strategy(arb_node())] node: Node) {
    assert_eq!(expected_lines(&node), node.list().count());
}

#[proptest]
fn pre_order(#[strategy(arb_node())] node: Node) {
    assert_blocks(&node);
}

#[proptest]
fn idempotent(#[strategy(arb_node())] node: Node) {
    let first: Vec<&str> = node.list().collect();
    let second: Vec<&str> = node.list().collect();
    assert_eq!(first, second);
}

#[proptest]
fn reversing_children_reverses_blocks(#[strategy(arb_node())] node: Node) {
    if let Node::Composite(mut composite) = node {
        let blocks: Vec<Vec<String>> = composite
            .children()
            .map(|c| c.list().map(str::to_owned).collect())
            .collect();

        let mut children = composite.take_children();
        children.reverse();
        composite.set_children(children);

        let mut expected = vec![composite.name().to_string()];
        if blocks.is_empty() {
            expected.push(EMPTY_MARKER.to_owned());
        }
        expected.extend(blocks.into_iter().rev().flatten());

        assert_eq!(
            expected,
            composite.list().map(str::to_owned).collect::<Vec<_>>()
        );
    }
}

#[proptest]
fn hierarchy_agrees_with_owned(#[strategy(arb_node())] node: Node) {
    let mut h = Hierarchy::new();
    let root = h.import(&node);

    assert_eq!(node.node_count(), h.len());
    assert_eq!(&node, &h.snapshot(root).unwrap());
    assert_eq!(
        node.list().map(str::to_owned).collect::<Vec<_>>(),
        h.list(root).unwrap()
    );
}

#[proptest]
fn manifest_preserves_tree(#[strategy(arb_node())] node: Node) {
    let json = serde_json::to_string(&Manifest::from(&node)).unwrap();
    let manifest: Manifest = serde_json::from_str(&json).unwrap();
    assert_eq!(node, Node::from(manifest));
}
